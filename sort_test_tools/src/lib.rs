pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Some sorting networks only accept specific input lengths. The test suites skip inputs for
    /// which this returns `false`.
    fn supports_len(_len: usize) -> bool {
        true
    }
}

/// Sorts that only work on non-negative `i32` values and don't take a comparison function.
pub trait IntSort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

pub mod patterns;
