//! Shellsort with the halving gap sequence `len / 2, len / 4, .., 1`.

use std::cmp::Ordering;

sort_impl!("shell_unstable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    let mut gap = len / 2;
    while gap > 0 {
        // Gapped insertion sort, the final gap of 1 is a plain insertion sort.
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&v[j - gap], &v[j]) == Ordering::Greater {
                v.swap(j - gap, j);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
