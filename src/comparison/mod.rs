//! Sorts that only interact with the elements through a comparison function.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::SortError;

pub mod bitonic;
pub mod bubble;
pub mod cocktail_shaker;
pub mod comb;
pub mod cycle;
pub mod gnome;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod odd_even;
pub mod quick;
pub mod selection;
pub mod shell;

/// Selects one of the comparison sorts at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Shell,
    CocktailShaker,
    Comb,
    Gnome,
    OddEven,
    Cycle,
    Bitonic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::CocktailShaker,
        Algorithm::Comb,
        Algorithm::Gnome,
        Algorithm::OddEven,
        Algorithm::Cycle,
        Algorithm::Bitonic,
    ];

    /// Short snake case name, the same as the module name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::CocktailShaker => "cocktail_shaker",
            Algorithm::Comb => "comb",
            Algorithm::Gnome => "gnome",
            Algorithm::OddEven => "odd_even",
            Algorithm::Bitonic => "bitonic",
            Algorithm::Cycle => "cycle",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::Merge
                | Algorithm::CocktailShaker
                | Algorithm::Gnome
                | Algorithm::OddEven
        )
    }

    pub fn supports_len(self, len: usize) -> bool {
        match self {
            Algorithm::Bitonic => bitonic::supports_len(len),
            _ => true,
        }
    }

    #[inline]
    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => bubble::sort_by(v, compare),
            Algorithm::Insertion => insertion::sort_by(v, compare),
            Algorithm::Selection => selection::sort_by(v, compare),
            Algorithm::Merge => merge::sort_by(v, compare),
            Algorithm::Quick => quick::sort_by(v, compare),
            Algorithm::Heap => heap::sort_by(v, compare),
            Algorithm::Shell => shell::sort_by(v, compare),
            Algorithm::CocktailShaker => cocktail_shaker::sort_by(v, compare),
            Algorithm::Comb => comb::sort_by(v, compare),
            Algorithm::Gnome => gnome::sort_by(v, compare),
            Algorithm::OddEven => odd_even::sort_by(v, compare),
            Algorithm::Bitonic => bitonic::sort_by(v, compare),
            Algorithm::Cycle => cycle::sort_by(v, compare),
        }
    }

    /// Sorts `v`, reporting the failures the plain [`Algorithm::sort_by`] would log or panic on.
    pub fn try_sort_by<T, F>(self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Merge => merge::try_sort_by(v, compare),
            Algorithm::Bitonic => bitonic::try_sort_by(v, compare),
            infallible => {
                infallible.sort_by(v, compare);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown comparison sort `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
