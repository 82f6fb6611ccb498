//! Cycle sort. The element travelling along a cycle is held outside the slice, every element it
//! displaces is written straight to its final position. Each cycle of length `k` costs `k`
//! writes into the slice, the minimum for any in-place sort.

use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("cycle_unstable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cycle_sort(v, &mut compare);
}

/// Returns the number of element writes into `v`.
fn cycle_sort<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let base = v.as_mut_ptr();
    let mut writes = 0;

    // Under a consistent comparison function every swap settles one element for good.
    let mut swaps_left = len;

    for cycle_start in 0..len - 1 {
        // SAFETY: All offsets passed to `base.add` are below `len`. Until the cycle opens every
        // slot is initialized. Once `v[cycle_start]` is moved out `find_slot` only reads slots
        // after `cycle_start`, and `hole` puts the travelling element back into
        // `v[cycle_start]` on every exit, including a panicking `compare`. `item` is
        // `ManuallyDrop`, the value is owned by the slice again afterwards.
        unsafe {
            let mut pos = find_slot(base, cycle_start, len, &*base.add(cycle_start), compare);
            if pos == cycle_start {
                continue;
            }

            let mut item = ManuallyDrop::new(ptr::read(base.add(cycle_start)));
            let item_ptr: *mut T = &mut *item;
            let _hole = CycleHole {
                src: item_ptr,
                dest: base.add(cycle_start),
            };
            // Closing the cycle writes `v[cycle_start]`, whichever way the loop ends.
            writes += 1;

            loop {
                if swaps_left == 0 {
                    return writes;
                }
                swaps_left -= 1;

                ptr::swap_nonoverlapping(item_ptr, base.add(pos), 1);
                writes += 1;

                pos = find_slot(base, cycle_start, len, &*item_ptr, compare);
                if pos == cycle_start {
                    break;
                }
            }
        }
    }

    writes
}

/// Final slot of `item` relative to `v[cycle_start + 1..]`, past any equal elements already in
/// place there.
///
/// # Safety
///
/// `base` must point to `len` elements of which `base[cycle_start + 1..len]` are initialized,
/// `item` must not alias any of them.
unsafe fn find_slot<T, F>(
    base: *const T,
    cycle_start: usize,
    len: usize,
    item: &T,
    compare: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // SAFETY: The caller guarantees that every index read here is initialized.
    unsafe {
        let mut pos = cycle_start;
        for i in (cycle_start + 1)..len {
            if compare(&*base.add(i), item) == Ordering::Less {
                pos += 1;
            }
        }

        if pos != cycle_start {
            while pos < len - 1 && compare(&*base.add(pos), item) == Ordering::Equal {
                pos += 1;
            }
        }

        pos
    }
}

// When dropped, copies from `src` into `dest`.
struct CycleHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for CycleHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` is the travelling element and `dest` the vacant cycle start, see
        // `cycle_sort`.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
