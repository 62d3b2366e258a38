//! Fuzzes the ETS2 telemetry JSON decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parse_telemetry
#![no_main]
use ets2_telemetry_client::parse_telemetry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected, panics are not.
    let _ = parse_telemetry(data);
});
