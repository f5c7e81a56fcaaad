//! Fuzz target for configuration bundle JSON parsing.
//!
//! Tests that bundle deserialization handles arbitrary input without
//! panicking, and that typed reads over a parsed bundle stay total.

#![no_main]

use cc_bundle::ConfigBundle;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    let Ok(bundle) = serde_json::from_slice::<ConfigBundle>(data) else {
        return;
    };

    // Typed reads are total for any key and any stored kind
    for (key, _) in bundle.iter() {
        let _ = bundle.get_bool(key);
        let _ = bundle.get_string(key);
        let _ = bundle.get_i32(key);
        let _ = bundle.get_i64(key);
        let _ = bundle.get_i32_seq(key);
    }

    // A parsed bundle must survive a serialize/parse round trip
    let json = serde_json::to_string(&bundle).unwrap();
    let back: ConfigBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bundle);
});
