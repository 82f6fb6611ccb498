//! Helpers shared by several sorts.

use std::cmp::Ordering;

use crate::SortError;

/// Three-way comparison of two `i32` by their natural order.
///
/// Convenience comparator for the generic sorts, e.g.
/// `comparison::insertion::sort_by(&mut v, compare_ints)`.
#[inline]
pub fn compare_ints(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Largest value of `v`, `None` if `v` is empty.
pub fn max_value(v: &[i32]) -> Option<i32> {
    v.iter().copied().max()
}

/// Smallest and largest value of `v` in a single pass, `None` if `v` is empty.
pub fn min_max(v: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = v.split_first()?;

    Some(rest.iter().fold((first, first), |(min, max), &val| {
        (min.min(val), max.max(val))
    }))
}

/// Returns the first negative element as error.
pub fn ensure_non_negative(v: &[i32]) -> Result<(), SortError> {
    match v.iter().position(|&val| val < 0) {
        Some(index) => Err(SortError::NegativeValue {
            index,
            value: v[index],
        }),
        None => Ok(()),
    }
}

/// Reserves exactly `len` slots, reporting allocation failure instead of aborting.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;

    Ok(buf)
}

/// Best-effort wrapper used by the infallible entry points, see [`SortError`].
pub(crate) fn log_degraded(name: &str, len: usize, result: Result<(), SortError>) {
    if let Err(err) = result {
        log::warn!("{name}: giving up on {len} elements, slice may be partially sorted: {err}");
    }
}
