//! Insertion sort. Each element is inserted into the already sorted prefix, elements that compare
//! equal keep their order.

use std::cmp::Ordering;

sort_impl!("insertion_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], &mut compare);
    }
}

/// Moves the last element of `v` left, past every element of the sorted prefix `v[..len - 1]`
/// that is greater than it.
fn insert_tail<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let key = v.len() - 1;
    let mut dest = key;

    while dest > 0 && compare(&v[dest - 1], &v[key]) == Ordering::Greater {
        dest -= 1;
    }

    // Shifts v[dest..key] one to the right and drops the key into the hole.
    v[dest..].rotate_right(1);
}
