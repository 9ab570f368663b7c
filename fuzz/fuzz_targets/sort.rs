#![no_main]

use libfuzzer_sys::fuzz_target;
use logsort::{sort, sort_by_key};

fuzz_target!(|data: &[u8]| {
    let mut vec: Vec<u8> = data.to_vec();
    sort(&mut vec);

    for window in vec.windows(2) {
        assert!(window[0] <= window[1]);
    }

    // Same multiset as the input.
    let mut counts_in = [0usize; 256];
    let mut counts_out = [0usize; 256];
    for byte in data {
        counts_in[*byte as usize] += 1;
    }
    for byte in &vec {
        counts_out[*byte as usize] += 1;
    }
    assert_eq!(counts_in, counts_out);

    // Key-only sort must keep equal bytes in input order.
    let mut tagged: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();
    sort_by_key(&mut tagged, |entry| entry.0);

    for window in tagged.windows(2) {
        assert!(window[0] <= window[1]);
    }
});
