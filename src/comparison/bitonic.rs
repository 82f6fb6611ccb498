//! Bitonic sorting network.
//!
//! The sequence of compare/exchange operations only depends on the length, never on the values.
//! The network is only defined for lengths that are a power of two. [`sort_by`] panics on other
//! lengths, [`try_sort_by`] reports them. Neither pads or otherwise "fixes" the input.

use std::cmp::Ordering;

use crate::SortError;

sort_impl!("bitonic_unstable", supports_len = supports_len);

/// `true` for the lengths the network is defined for. Lengths 0 and 1 are trivially sorted.
#[inline]
pub fn supports_len(len: usize) -> bool {
    len < 2 || len.is_power_of_two()
}

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// # Panics
///
/// Panics if `v.len()` is at least 2 and not a power of two.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    assert!(
        supports_len(len),
        "bitonic sort needs a power of two length, got {len}"
    );

    sort_network(v, compare);
}

/// Like [`sort_by`], but returns [`SortError::NotPowerOfTwo`] instead of panicking. `v` is not
/// touched in that case.
pub fn try_sort_by<T, F>(v: &mut [T], compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if !supports_len(len) {
        return Err(SortError::NotPowerOfTwo { len });
    }

    sort_network(v, compare);

    Ok(())
}

fn sort_network<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // `block` is the size of the bitonic sequences being merged. Blocks whose index bit `block`
    // is clear are sorted ascending, the others descending, so that each pair of neighboring
    // blocks forms a bitonic sequence for the next round.
    let mut block = 2;
    loop {
        let mut stride = block / 2;
        while stride > 0 {
            for i in 0..len {
                let partner = i ^ stride;
                if partner <= i {
                    continue;
                }

                let ascending = i & block == 0;
                if ascending == (compare(&v[i], &v[partner]) == Ordering::Greater) {
                    v.swap(i, partner);
                }
            }

            stride /= 2;
        }

        if block == len {
            break;
        }
        block *= 2;
    }
}
