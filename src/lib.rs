//! Classic comparison sorts and integer distribution sorts behind one contract.
//!
//! Every comparison sort lives in its own module under [`comparison`] and exposes
//! `sort(&mut [T])` and `sort_by(&mut [T], compare)`. The distribution sorts under [`integer`]
//! take `&mut [i32]`. Sorts that can fail, because they allocate scratch space or have a domain
//! precondition, additionally expose a `try_` variant returning [`SortError`].

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
    ($name:expr, supports_len = $supports_len:path) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            fn supports_len(len: usize) -> bool {
                $supports_len(len)
            }
        }
    };
}

macro_rules! int_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::IntSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(arr: &mut [i32]) {
                sort(arr);
            }
        }
    };
}

pub mod comparison;
pub mod error;
pub mod integer;
pub mod util;

pub use comparison::Algorithm;
pub use error::SortError;
pub use integer::IntAlgorithm;
