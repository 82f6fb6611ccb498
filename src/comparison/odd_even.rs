//! Odd-even transposition sort, also known as brick sort.

use std::cmp::Ordering;

sort_impl!("odd_even_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // len rounds of odd and even phases sort any input under a consistent comparison function,
    // one more confirms it.
    for _ in 0..=len {
        let mut sorted = true;

        // Odd phase, pairs (1, 2), (3, 4), ..
        for i in (1..len - 1).step_by(2) {
            sorted &= !compare_exchange(v, i, &mut compare);
        }

        // Even phase, pairs (0, 1), (2, 3), ..
        for i in (0..len - 1).step_by(2) {
            sorted &= !compare_exchange(v, i, &mut compare);
        }

        if sorted {
            break;
        }
    }
}

/// Swaps `v[i]` and `v[i + 1]` if they are out of order, returns whether it did.
#[inline]
fn compare_exchange<T, F>(v: &mut [T], i: usize, compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let out_of_order = compare(&v[i], &v[i + 1]) == Ordering::Greater;
    if out_of_order {
        v.swap(i, i + 1);
    }

    out_of_order
}
