//! Pigeonhole sort, one hole per value between the minimum and the maximum.

use crate::util::{log_degraded, min_max, try_with_capacity};
use crate::SortError;

int_sort_impl!("pigeonhole");

/// Sorts `v` in ascending order. Negative values are fine.
///
/// Time and space are linear in `max - min`, not in `v.len()`. If the holes can't be allocated
/// `v` is left untouched and a warning is logged.
pub fn sort(v: &mut [i32]) {
    let len = v.len();
    log_degraded("pigeonhole", len, try_sort(v));
}

/// Like [`sort`], but reports a failed hole allocation. `v` is unmodified on error.
pub fn try_sort(v: &mut [i32]) -> Result<(), SortError> {
    if v.len() < 2 {
        return Ok(());
    }

    let Some((min, max)) = min_max(v) else {
        return Ok(());
    };

    // i64 because max - min overflows i32 for inputs spanning zero.
    let min = i64::from(min);
    let max = i64::from(max);
    let holes_len = usize::try_from(max - min + 1)
        .map_err(|_| SortError::RangeTooLarge { min, max })?;

    let mut holes = try_with_capacity::<usize>(holes_len)?;
    holes.resize(holes_len, 0);

    for &val in v.iter() {
        holes[(i64::from(val) - min) as usize] += 1;
    }

    let mut out = 0;
    for (offset, &count) in holes.iter().enumerate() {
        if count == 0 {
            continue;
        }

        // min + offset <= max, always a valid i32.
        let val = (min + offset as i64) as i32;
        v[out..out + count].fill(val);
        out += count;
    }

    debug_assert_eq!(out, v.len());

    Ok(())
}
