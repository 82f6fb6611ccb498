//! Distribution sorts specialized for `i32` values.
//!
//! Counting, radix and bucket sort only accept values `>= 0`, pigeonhole sort accepts any value.

use std::fmt;
use std::str::FromStr;

use crate::SortError;

pub mod bucket;
pub mod counting;
pub mod pigeonhole;
pub mod radix;

/// Selects one of the integer sorts at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntAlgorithm {
    Counting,
    Radix,
    Bucket,
    Pigeonhole,
}

impl IntAlgorithm {
    pub const ALL: [IntAlgorithm; 4] = [
        IntAlgorithm::Counting,
        IntAlgorithm::Radix,
        IntAlgorithm::Bucket,
        IntAlgorithm::Pigeonhole,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntAlgorithm::Pigeonhole => "pigeonhole",
            IntAlgorithm::Counting => "counting",
            IntAlgorithm::Radix => "radix",
            IntAlgorithm::Bucket => "bucket",
        }
    }

    /// `false` if [`IntAlgorithm::sort`] panics or gives up on negative values.
    pub fn accepts_negative(self) -> bool {
        matches!(self, IntAlgorithm::Pigeonhole)
    }

    pub fn sort(self, v: &mut [i32]) {
        match self {
            IntAlgorithm::Pigeonhole => pigeonhole::sort(v),
            IntAlgorithm::Counting => counting::sort(v),
            IntAlgorithm::Radix => radix::sort(v),
            IntAlgorithm::Bucket => bucket::sort(v),
        }
    }

    pub fn try_sort(self, v: &mut [i32]) -> Result<(), SortError> {
        match self {
            IntAlgorithm::Pigeonhole => pigeonhole::try_sort(v),
            IntAlgorithm::Counting => counting::try_sort(v),
            IntAlgorithm::Radix => radix::try_sort(v),
            IntAlgorithm::Bucket => bucket::try_sort(v),
        }
    }
}

impl fmt::Display for IntAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown integer sort `{0}`")]
pub struct UnknownIntAlgorithm(pub String);

impl FromStr for IntAlgorithm {
    type Err = UnknownIntAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        IntAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| UnknownIntAlgorithm(s.to_string()))
    }
}
