//! Selection sort.

use std::cmp::Ordering;

sort_impl!("selection_unstable");

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

    for i in 0..len - 1 {
        // The first occurrence of the minimum wins.
        let mut min_idx = i;
        for j in (i + 1)..len {
            if compare(&v[j], &v[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}
