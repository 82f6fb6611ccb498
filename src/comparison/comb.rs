//! Comb sort. A bubble sort comparing elements `gap` apart, with the gap shrinking by a factor of
//! 1.3 until it reaches 1.

use std::cmp::Ordering;

sort_impl!("comb_unstable");

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

    let mut gap = len;
    let mut swapped = true;

    // Once the gap is 1 this is a bubble sort, which needs at most `len` passes for a consistent
    // comparison function.
    let mut gap_one_passes = 0;

    while gap != 1 || swapped {
        gap = shrink_gap(gap);

        swapped = false;
        for i in 0..len - gap {
            if compare(&v[i], &v[i + gap]) == Ordering::Greater {
                v.swap(i, i + gap);
                swapped = true;
            }
        }

        if gap == 1 {
            gap_one_passes += 1;
            if gap_one_passes >= len {
                break;
            }
        }
    }
}

#[inline]
fn shrink_gap(gap: usize) -> usize {
    (gap * 10 / 13).max(1)
}
