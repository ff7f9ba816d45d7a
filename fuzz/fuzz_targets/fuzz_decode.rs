#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic or read out of bounds.
    let _ = zenqoi::decode(data);
    let _ = zenqoi::decode_rgba(data);
    let _ = zenqoi::Header::from_bytes(data);
});
