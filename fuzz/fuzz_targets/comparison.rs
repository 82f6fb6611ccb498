#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_engine::Algorithm;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, values)) = data.split_first() else {
        return;
    };

    let algorithm = Algorithm::ALL[selector as usize % Algorithm::ALL.len()];

    let mut v = values.to_vec();
    if !algorithm.supports_len(v.len()) {
        // Largest power of two below the length.
        v.truncate(1 << (usize::BITS - 1 - v.len().leading_zeros()));
    }

    let mut expected = v.clone();
    expected.sort();

    algorithm.sort(&mut v);
    assert_eq!(v, expected, "{algorithm}");
});
