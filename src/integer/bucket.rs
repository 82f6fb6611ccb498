//! Bucket sort with a fixed number of equal width buckets.
//!
//! Negative input is rejected as a whole: [`sort`] leaves such a slice as is.

use crate::comparison::insertion;
use crate::util::{compare_ints, ensure_non_negative, log_degraded, max_value};
use crate::SortError;

int_sort_impl!("bucket");

const BUCKET_COUNT: usize = 10;

/// Sorts `v` in ascending order.
///
/// If `v` contains a negative value it is left unmodified, this is logged at debug level. Each
/// non-empty bucket reserves room for `v.len()` values, if that fails `v` is left unmodified and
/// a warning is logged.
pub fn sort(v: &mut [i32]) {
    match try_sort(v) {
        Err(err @ SortError::NegativeValue { .. }) => {
            log::debug!("bucket: leaving {} elements unsorted, {err}", v.len());
        }
        result => log_degraded("bucket", v.len(), result),
    }
}

/// Like [`sort`], but reports negative values and allocation failures. `v` is unmodified on
/// error.
pub fn try_sort(v: &mut [i32]) -> Result<(), SortError> {
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    ensure_non_negative(v)?;

    let max = max_value(v).unwrap_or(0);
    // val / bucket_width < BUCKET_COUNT for every val <= max.
    let bucket_width = max / BUCKET_COUNT as i32 + 1;

    let mut buckets: [Vec<i32>; BUCKET_COUNT] = Default::default();
    for &val in v.iter() {
        let bucket = &mut buckets[(val / bucket_width) as usize];
        if bucket.capacity() == 0 {
            // Any bucket may end up holding the whole input.
            bucket.try_reserve_exact(len)?;
        }
        bucket.push(val);
    }

    let mut out = 0;
    for bucket in buckets.iter_mut() {
        insertion::sort_by(bucket.as_mut_slice(), compare_ints);

        v[out..out + bucket.len()].copy_from_slice(bucket);
        out += bucket.len();
    }

    Ok(())
}
