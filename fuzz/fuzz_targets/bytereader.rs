#![no_main]

use bitstream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 4;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let base = data[idx.saturating_sub(1)];
                let _ = reader.read_var_u32(base, base % 8);
            }
            2 => {
                let _ = reader.read_var_u32(0, 0);
            }
            _ => {
                reader.set_limit(usize::from(data[idx.saturating_sub(1)]));
            }
        }
        assert!(reader.position() <= data.len());
    }
});
