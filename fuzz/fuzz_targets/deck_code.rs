#![no_main]

use codec::{parse_deck, parse_deck_bytes, CodecLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = parse_deck_bytes(data, &CodecLimits::unlimited());

    // Same bytes through the text layer.
    let code = wire::encode_deck_string(data);
    let _ = parse_deck(&code);
});
