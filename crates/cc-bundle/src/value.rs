//! Configuration value union.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single configuration bundle entry.
///
/// The platform bundle format supports exactly these eight kinds: the four
/// scalar kinds and their sequence forms. Keys conventionally encode the
/// expected kind in their suffix, but the container itself does not enforce
/// the convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigValue {
    Bool(bool),
    String(String),
    I32(i32),
    I64(i64),
    BoolSeq(Vec<bool>),
    StringSeq(Vec<String>),
    I32Seq(Vec<i32>),
    I64Seq(Vec<i64>),
}

impl ConfigValue {
    /// Stable kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::String(_) => "string",
            ConfigValue::I32(_) => "i32",
            ConfigValue::I64(_) => "i64",
            ConfigValue::BoolSeq(_) => "bool_seq",
            ConfigValue::StringSeq(_) => "string_seq",
            ConfigValue::I32Seq(_) => "i32_seq",
            ConfigValue::I64Seq(_) => "i64_seq",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{v}"),
            ConfigValue::String(v) => write!(f, "{v}"),
            ConfigValue::I32(v) => write!(f, "{v}"),
            ConfigValue::I64(v) => write!(f, "{v}"),
            ConfigValue::BoolSeq(v) => write!(f, "{v:?}"),
            ConfigValue::StringSeq(v) => write!(f, "{v:?}"),
            ConfigValue::I32Seq(v) => write!(f, "{v:?}"),
            ConfigValue::I64Seq(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::String(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::String(v.to_string())
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::I32(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::I64(v)
    }
}

impl From<Vec<bool>> for ConfigValue {
    fn from(v: Vec<bool>) -> Self {
        ConfigValue::BoolSeq(v)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(v: Vec<String>) -> Self {
        ConfigValue::StringSeq(v)
    }
}

impl From<Vec<i32>> for ConfigValue {
    fn from(v: Vec<i32>) -> Self {
        ConfigValue::I32Seq(v)
    }
}

impl From<Vec<i64>> for ConfigValue {
    fn from(v: Vec<i64>) -> Self {
        ConfigValue::I64Seq(v)
    }
}
