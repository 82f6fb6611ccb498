#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_engine::IntAlgorithm;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, values)) = data.split_first() else {
        return;
    };

    let algorithm = IntAlgorithm::ALL[selector as usize % IntAlgorithm::ALL.len()];

    // Two bytes per value keeps the histograms small, pigeonhole also gets negative values.
    let mut v: Vec<i32> = values
        .chunks_exact(2)
        .map(|pair| {
            let val = i32::from(u16::from_le_bytes([pair[0], pair[1]]));
            if algorithm.accepts_negative() {
                val - i32::from(u16::MAX / 2)
            } else {
                val
            }
        })
        .collect();

    let mut expected = v.clone();
    expected.sort();

    algorithm.try_sort(&mut v).unwrap();
    assert_eq!(v, expected, "{algorithm}");
});
