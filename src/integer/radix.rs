//! Least significant digit radix sort, base 10.

use crate::util::{ensure_non_negative, log_degraded, try_with_capacity};
use crate::SortError;

int_sort_impl!("radix_lsd_stable");

const RADIX: usize = 10;

/// Sorts `v` in ascending order.
///
/// Each digit pass allocates an output buffer of `v.len()` elements. If that fails the sort
/// stops, `v` then holds the result of the preceding passes and a warning is logged.
///
/// # Panics
///
/// Panics if `v` contains a negative value.
pub fn sort(v: &mut [i32]) {
    match try_sort(v) {
        Err(SortError::NegativeValue { index, value }) => {
            panic!("radix sort needs values >= 0, found {value} at index {index}")
        }
        result => log_degraded("radix", v.len(), result),
    }
}

/// Like [`sort`], but reports negative values and allocation failures.
pub fn try_sort(v: &mut [i32]) -> Result<(), SortError> {
    if v.len() < 2 {
        return Ok(());
    }

    ensure_non_negative(v)?;

    sort_by_key(v, |&val| val as usize)
}

/// Stable radix sort of arbitrary records by a non-negative integer key.
///
/// `key` is called several times per element and must return the same value each time.
pub fn sort_by_key<T, K>(v: &mut [T], mut key: K) -> Result<(), SortError>
where
    T: Copy,
    K: FnMut(&T) -> usize,
{
    if v.len() < 2 {
        return Ok(());
    }

    let max = v.iter().map(&mut key).max().unwrap_or(0);

    let mut divisor: usize = 1;
    while max / divisor > 0 {
        log::trace!("radix: digit pass with divisor {divisor} over {} elements", v.len());
        digit_pass(v, divisor, &mut key)?;

        divisor = match divisor.checked_mul(RADIX) {
            Some(next) => next,
            // The divisor already covers the most significant digit of usize::MAX.
            None => break,
        };
    }

    Ok(())
}

/// Stable counting sort on the digit `(key / divisor) % RADIX`.
fn digit_pass<T, K>(v: &mut [T], divisor: usize, key: &mut K) -> Result<(), SortError>
where
    T: Copy,
    K: FnMut(&T) -> usize,
{
    let mut output = try_with_capacity::<T>(v.len())?;
    output.extend_from_slice(v);

    let mut digit = |elem: &T| (key(elem) / divisor) % RADIX;

    let mut counts = [0usize; RADIX];
    for elem in v.iter() {
        counts[digit(elem)] += 1;
    }

    for d in 1..RADIX {
        counts[d] += counts[d - 1];
    }

    for elem in v.iter().rev() {
        let d = digit(elem);
        counts[d] -= 1;
        output[counts[d]] = *elem;
    }

    v.copy_from_slice(&output);

    Ok(())
}
