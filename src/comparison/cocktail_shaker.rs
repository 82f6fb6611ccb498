//! Cocktail shaker sort, a bubble sort alternating between forward and backward passes.

use std::cmp::Ordering;

sort_impl!("cocktail_shaker_stable");

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

    // v[..start] and v[end + 1..] are in their final positions.
    let mut start = 0;
    let mut end = len - 1;

    while start < end {
        // Forward pass, bubbles the maximum of v[start..=end] up to `end`.
        let mut swapped = false;
        for i in start..end {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        end -= 1;

        // Backward pass, sinks the minimum of v[start..=end] down to `start`.
        swapped = false;
        for i in (start..end).rev() {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        start += 1;
    }
}
