//! Top-down merge sort. Both halves are copied into scratch space and merged back into the slice,
//! ties are taken from the left run which keeps the sort stable.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::util::{log_degraded, try_with_capacity};
use crate::SortError;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` with `compare`.
///
/// Needs scratch space for `v.len()` elements. If it can't be allocated, `v` is left untouched
/// and a warning is logged, use [`try_sort_by`] to observe that case.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    log_degraded("merge", len, try_sort_by(v, compare));
}

/// Like [`sort_by`], but reports a failed scratch allocation. `v` is unmodified in that case.
pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if mem::size_of::<T>() == 0 || v.len() < 2 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return Ok(());
    }

    // One buffer serves every level of the recursion, a merge only ever needs as much as the
    // sub-slice it merges.
    let mut buf = try_with_capacity::<T>(v.len())?;

    // SAFETY: `buf` has capacity for `v.len()` elements and doesn't alias `v`. `buf` keeps a
    // length of zero, so it never drops the bitwise copies that pass through it.
    unsafe {
        merge_sort(v, buf.as_mut_ptr(), &mut compare);
    }

    Ok(())
}

/// # Safety
///
/// `buf` must be valid for `v.len()` writes and must not alias `v`. `T` must not be a zero-sized
/// type.
unsafe fn merge_sort<T, F>(v: &mut [T], buf: *mut T, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // For odd lengths the left half gets the extra element.
    let mid = len - len / 2;

    let (left, right) = v.split_at_mut(mid);
    // SAFETY: Both halves are shorter than `v`, the caller guarantees the rest.
    unsafe {
        merge_sort(left, buf, compare);
        merge_sort(right, buf, compare);
        merge(v, mid, buf, compare);
    }
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into `v`.
///
/// # Safety
///
/// `buf` must be valid for `v.len()` writes and must not alias `v`. `T` must not be a zero-sized
/// type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_base = v.as_mut_ptr();

    // SAFETY: The caller guarantees that `buf` holds `len` elements and doesn't alias `v`. After
    // the copy every element of `v` is logically owned by `buf`, `hole` writes each of them back
    // exactly once, either in the loop or when dropped. The latter also covers a panicking
    // `compare`.
    unsafe {
        ptr::copy_nonoverlapping(v_base, buf, len);

        let mut hole = MergeHole {
            left: buf,
            left_end: buf.add(mid),
            right: buf.add(mid),
            right_end: buf.add(len),
            dest: v_base,
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            let take_left = compare(&*hole.left, &*hole.right) != Ordering::Greater;

            let src = if take_left { hole.left } else { hole.right };
            ptr::copy_nonoverlapping(src, hole.dest, 1);

            if take_left {
                hole.left = hole.left.add(1);
            } else {
                hole.right = hole.right.add(1);
            }
            hole.dest = hole.dest.add(1);
        }

        // `hole` gets dropped here and moves whatever is left of the two runs into place.
    }
}

// The remaining elements of both runs, in order, fill exactly the gap between `dest` and the
// end of the merged slice.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and the pointer pairs point into the same scratch
        // buffer with `start <= end`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
