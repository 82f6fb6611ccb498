//! Counting sort for non-negative integers.

use crate::util::{ensure_non_negative, log_degraded, try_with_capacity};
use crate::SortError;

int_sort_impl!("counting_stable");

/// Sorts `v` in ascending order.
///
/// Allocates a histogram with `max + 1` slots and an output buffer of `v.len()` elements. If
/// either allocation fails `v` is left untouched and a warning is logged.
///
/// # Panics
///
/// Panics if `v` contains a negative value.
pub fn sort(v: &mut [i32]) {
    match try_sort(v) {
        Err(SortError::NegativeValue { index, value }) => {
            panic!("counting sort needs values >= 0, found {value} at index {index}")
        }
        result => log_degraded("counting", v.len(), result),
    }
}

/// Like [`sort`], but reports negative values and allocation failures. `v` is unmodified on
/// error.
pub fn try_sort(v: &mut [i32]) -> Result<(), SortError> {
    if v.len() < 2 {
        return Ok(());
    }

    ensure_non_negative(v)?;

    sort_by_key(v, |&val| val as usize)
}

/// Stable counting sort of arbitrary records by a non-negative integer key.
///
/// `key` is called several times per element and must return the same value each time. `v` is
/// unmodified on error.
pub fn sort_by_key<T, K>(v: &mut [T], mut key: K) -> Result<(), SortError>
where
    T: Copy,
    K: FnMut(&T) -> usize,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let max = v.iter().map(&mut key).max().unwrap_or(0);
    let slots = max
        .checked_add(1)
        .ok_or(SortError::KeyTooLarge { key: max })?;

    let mut counts = try_with_capacity::<usize>(slots)?;
    counts.resize(slots, 0);

    // Every slot gets overwritten by the placement scan, the copy just initializes them.
    let mut output = try_with_capacity::<T>(len)?;
    output.extend_from_slice(v);

    for elem in v.iter() {
        counts[key(elem)] += 1;
    }

    // Afterwards counts[k] is one past the last output slot for key k.
    for k in 1..slots {
        counts[k] += counts[k - 1];
    }

    // Scanning backwards fills each key's slots from the back, which keeps equal keys in order.
    for elem in v.iter().rev() {
        let k = key(elem);
        counts[k] -= 1;
        output[counts[k]] = *elem;
    }

    v.copy_from_slice(&output);

    Ok(())
}
