//! Key-value configuration container with per-kind typed access.

use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// An opaque configuration bundle.
///
/// Reads are total: asking for a key that is absent, or asking with the wrong
/// kind, yields the kind's zero value (`false`, `""`, `0`, empty sequence)
/// rather than an error. Kind mismatches are logged at debug level since they
/// usually indicate a misspelled key suffix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBundle {
    entries: BTreeMap<String, ConfigValue>,
}

macro_rules! typed_get {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty, $default:expr) => {
        $(#[$meta])*
        pub fn $name(&self, key: &str) -> $ty {
            match self.entries.get(key) {
                Some(ConfigValue::$variant(v)) => v.clone(),
                Some(other) => {
                    debug!(
                        key,
                        expected = stringify!($variant),
                        actual = other.kind(),
                        "bundle value has unexpected kind, returning default"
                    );
                    $default
                }
                None => $default,
            }
        }
    };
}

impl ConfigBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bundle holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present, whatever its kind.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove the entry for `key` if present.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    /// Untyped read of `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.entries.iter()
    }

    typed_get!(
        /// Boolean read; absent or mismatched keys read as `false`.
        get_bool, Bool, bool, false
    );
    typed_get!(
        /// String read; absent or mismatched keys read as `""`.
        get_string, String, String, String::new()
    );
    typed_get!(
        /// 32-bit integer read; absent or mismatched keys read as `0`.
        get_i32, I32, i32, 0
    );
    typed_get!(
        /// 64-bit integer read; absent or mismatched keys read as `0`.
        get_i64, I64, i64, 0
    );
    typed_get!(
        /// Boolean sequence read; absent or mismatched keys read as empty.
        get_bool_seq, BoolSeq, Vec<bool>, Vec::new()
    );
    typed_get!(
        /// String sequence read; absent or mismatched keys read as empty.
        get_string_seq, StringSeq, Vec<String>, Vec::new()
    );
    typed_get!(
        /// 32-bit integer sequence read; absent or mismatched keys read as empty.
        get_i32_seq, I32Seq, Vec<i32>, Vec::new()
    );
    typed_get!(
        /// 64-bit integer sequence read; absent or mismatched keys read as empty.
        get_i64_seq, I64Seq, Vec<i64>, Vec::new()
    );
}

impl FromIterator<(String, ConfigValue)> for ConfigBundle {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        ConfigBundle {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_read_as_zero_values() {
        let bundle = ConfigBundle::new();
        assert!(!bundle.get_bool("missing_bool"));
        assert_eq!(bundle.get_string("missing_string"), "");
        assert_eq!(bundle.get_i32("missing_int"), 0);
        assert_eq!(bundle.get_i64("missing_long"), 0);
        assert!(bundle.get_bool_seq("missing").is_empty());
        assert!(bundle.get_string_seq("missing").is_empty());
        assert!(bundle.get_i32_seq("missing").is_empty());
        assert!(bundle.get_i64_seq("missing").is_empty());
    }

    #[test]
    fn test_set_then_get_each_kind() {
        let mut bundle = ConfigBundle::new();
        bundle.set("a_bool", true);
        bundle.set("a_string", "hello");
        bundle.set("an_i32", 42_i32);
        bundle.set("an_i64", 1_i64 << 40);
        bundle.set("bools", vec![true, false]);
        bundle.set("strings", vec!["x".to_string(), "y".to_string()]);
        bundle.set("ints", vec![1_i32, 2]);
        bundle.set("longs", vec![9_i64]);

        assert!(bundle.get_bool("a_bool"));
        assert_eq!(bundle.get_string("a_string"), "hello");
        assert_eq!(bundle.get_i32("an_i32"), 42);
        assert_eq!(bundle.get_i64("an_i64"), 1_i64 << 40);
        assert_eq!(bundle.get_bool_seq("bools"), vec![true, false]);
        assert_eq!(bundle.get_string_seq("strings"), vec!["x", "y"]);
        assert_eq!(bundle.get_i32_seq("ints"), vec![1, 2]);
        assert_eq!(bundle.get_i64_seq("longs"), vec![9]);
        assert_eq!(bundle.len(), 8);
    }

    #[test]
    fn test_kind_mismatch_reads_as_zero_value() {
        let mut bundle = ConfigBundle::new();
        bundle.set("key", 42_i32);
        assert!(!bundle.get_bool("key"));
        assert_eq!(bundle.get_string("key"), "");
        assert_eq!(bundle.get_i64("key"), 0);
        assert!(bundle.get_i32_seq("key").is_empty());
        // The entry itself is untouched.
        assert_eq!(bundle.get_i32("key"), 42);
    }

    #[test]
    fn test_set_replaces_previous_kind() {
        let mut bundle = ConfigBundle::new();
        bundle.set("key", true);
        bundle.set("key", "now a string");
        assert_eq!(bundle.get_string("key"), "now a string");
        assert!(!bundle.get_bool("key"));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut bundle = ConfigBundle::new();
        bundle.set("key", 1_i32);
        assert_eq!(bundle.remove("key"), Some(ConfigValue::I32(1)));
        assert_eq!(bundle.remove("key"), None);
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut bundle = ConfigBundle::new();
        bundle.set("flag", true);
        bundle.set("modes", vec![1_i32, 2]);
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ConfigBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
