//! Typed configuration bundle container for carrierctl.
//!
//! Telephony configuration travels as an opaque key-value bundle whose values
//! come in exactly eight kinds: `bool`, `String`, `i32`, `i64` and a sequence
//! form of each. This crate provides that container with the platform's read
//! semantics: typed reads are total, falling back to the kind's zero value
//! for absent keys and kind mismatches instead of failing.
//!
//! # Example
//!
//! ```
//! use cc_bundle::ConfigBundle;
//!
//! let mut overrides = ConfigBundle::new();
//! overrides.set("carrier_volte_available_bool", true);
//! overrides.set("carrier_nr_availabilities_int_array", vec![1_i32, 2]);
//!
//! assert!(overrides.get_bool("carrier_volte_available_bool"));
//! assert_eq!(overrides.get_i32_seq("carrier_nr_availabilities_int_array"), vec![1, 2]);
//! // Absent keys read as the kind's zero value.
//! assert_eq!(overrides.get_i32("wfc_spn_format_idx_int"), 0);
//! ```

pub mod bundle;
pub mod value;

pub use bundle::ConfigBundle;
pub use value::ConfigValue;
