//! Heapsort on a max-heap.

use std::cmp::Ordering;

sort_impl!("heap_unstable");

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

    // Build the heap in linear time, starting at the last parent.
    for node in (0..len / 2).rev() {
        sift_down(v, node, &mut compare);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut compare);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    loop {
        let mut largest = node;

        let left = 2 * node + 1;
        if left < len && compare(&v[left], &v[largest]) == Ordering::Greater {
            largest = left;
        }

        let right = left + 1;
        if right < len && compare(&v[right], &v[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}
