use std::collections::TryReserveError;

use thiserror::Error;

/// Why a `try_` sort returned before the slice was fully sorted.
///
/// The slice is never left with lost or duplicated elements. Which permutation it holds after an
/// error is documented per algorithm.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("unable to allocate scratch space: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("value {value} at index {index} is negative, only values >= 0 can be sorted")]
    NegativeValue { index: usize, value: i32 },

    #[error("length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("value range {min}..={max} does not fit a histogram")]
    RangeTooLarge { min: i64, max: i64 },

    #[error("key {key} does not fit a histogram")]
    KeyTooLarge { key: usize },
}

impl SortError {
    /// `true` if the failure is caused by the environment rather than the input.
    pub fn is_alloc(&self) -> bool {
        matches!(self, SortError::Alloc(_))
    }
}
