//! Bubble sort, adjacent swaps with an early exit once a pass made no swap.

use std::cmp::Ordering;

sort_impl!("bubble_stable");

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

    for pass in 0..len - 1 {
        // After each pass the largest remaining element sits at the end of the unsorted part.
        let unsorted_end = len - pass - 1;
        let mut swapped = false;

        for i in 0..unsorted_end {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_takes_one_pass() {
        let mut v = [1, 2, 3, 4, 5, 6];
        let mut comps = 0;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
        assert_eq!(comps, 5);
    }

    #[test]
    fn reversed_input_needs_all_passes() {
        let mut v = [4, 3, 2, 1];
        let mut comps = 0;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(comps, 3 + 2 + 1);
    }
}
