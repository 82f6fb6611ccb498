//! Gnome sort. A single cursor walks forward over ordered pairs and swaps its way back whenever it
//! finds one out of order.

use std::cmp::Ordering;

sort_impl!("gnome_stable");

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

    // Every swap removes one inversion and costs at most two steps, so a consistent comparison
    // function finishes in fewer than len * len steps.
    let mut steps_left = len.saturating_mul(len);

    let mut i = 1;
    while i < len && steps_left > 0 {
        steps_left -= 1;

        if compare(&v[i], &v[i - 1]) != Ordering::Less {
            i += 1;
        } else {
            v.swap(i - 1, i);
            i = (i - 1).max(1);
        }
    }
}
