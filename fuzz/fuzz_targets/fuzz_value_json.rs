//! Fuzz target for configuration value JSON parsing.
//!
//! Tests that the eight-kind value union rejects malformed JSON without
//! panicking.

#![no_main]

use cc_bundle::ConfigValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    if let Ok(value) = serde_json::from_slice::<ConfigValue>(data) {
        let _ = value.kind();
        let _ = value.to_string();
    }
});
