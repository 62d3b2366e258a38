//! Fuzzes decode -> encode -> decode stability.
//!
//! Any document that decodes must encode back to a document that decodes to
//! the same snapshot.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_roundtrip
#![no_main]
use ets2_telemetry_client::parse_telemetry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(first) = parse_telemetry(data) else {
        return;
    };
    let Ok(encoded) = serde_json::to_vec(&first) else {
        return;
    };
    // Decoded floats are always finite, so the encoding never loses a value.
    match parse_telemetry(&encoded) {
        Ok(second) => assert_eq!(first, second),
        Err(e) => panic!("re-decode failed: {e}"),
    }
});
