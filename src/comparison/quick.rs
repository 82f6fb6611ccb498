//! Quicksort with a Lomuto partition.
//!
//! By default the last element of every sub-slice is the pivot, which makes sorted, reversed and
//! duplicate heavy inputs quadratic. Sub-slices wait on an explicit stack instead of the call
//! stack, so no input can exhaust the latter.

use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quick_unstable");

/// How the pivot of each partition step is picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    /// The last element of the sub-slice.
    #[default]
    Last,
    /// The median of the first, middle and last element.
    MedianOfThree,
    /// A uniformly random element, drawn from `rand::thread_rng`.
    Random,
}

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_pivot(v, PivotStrategy::Last, compare);
}

pub fn sort_by_with_pivot<T, F>(v: &mut [T], strategy: PivotStrategy, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Always continuing with the smaller side and deferring the larger one limits the stack to
    // log2(len) entries.
    const MAX_DEPTH: usize = usize::BITS as usize;
    let mut stack = [(0usize, 0usize); MAX_DEPTH];
    let mut stack_len = 0;

    let (mut lo, mut hi) = (0, v.len());

    loop {
        while hi - lo >= 2 {
            let pivot_pos = lo + partition(&mut v[lo..hi], strategy, &mut compare);

            let left = (lo, pivot_pos);
            let right = (pivot_pos + 1, hi);
            let (smaller, larger) = if left.1 - left.0 <= right.1 - right.0 {
                (left, right)
            } else {
                (right, left)
            };

            if larger.1 - larger.0 >= 2 {
                stack[stack_len] = larger;
                stack_len += 1;
            }

            (lo, hi) = smaller;
        }

        if stack_len == 0 {
            break;
        }

        stack_len -= 1;
        (lo, hi) = stack[stack_len];
    }
}

/// Partitions `v` around the chosen pivot and returns the pivot's final position. Everything left
/// of it is less than the pivot, everything right of it is not.
fn partition<T, F>(v: &mut [T], strategy: PivotStrategy, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = v.len() - 1;

    let pivot = choose_pivot(v, strategy, compare);
    v.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if compare(&v[i], &v[last]) == Ordering::Less {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, last);

    store
}

fn choose_pivot<T, F>(v: &[T], strategy: PivotStrategy, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    match strategy {
        PivotStrategy::Last => len - 1,
        PivotStrategy::MedianOfThree => median_of_three(v, 0, len / 2, len - 1, compare),
        PivotStrategy::Random => rand::thread_rng().gen_range(0..len),
    }
}

fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |x: usize, y: usize| compare(&v[x], &v[y]) == Ordering::Less;

    let (lo, hi) = if is_less(b, a) { (b, a) } else { (a, b) };

    if !is_less(c, hi) {
        hi
    } else if is_less(c, lo) {
        lo
    } else {
        c
    }
}
