//! Platform version levels and protocol eras.
//!
//! The telephony configuration surface changed calling conventions at a known
//! platform release. Rather than branching on raw version numbers all over
//! the client, call sites ask a [`VersionProbe`] for the running level and
//! derive a [`ProtocolEra`] per operation. The era is never cached: a probe
//! is consulted each time a versioned call path is chosen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform API level.
///
/// Monotonically increasing release number reported by the running device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// First level with persistent override publishing and the
    /// caller-identity configuration read.
    pub const PERSISTENT_OVERRIDES: ApiLevel = ApiLevel(30);

    /// First level reporting NR availability modes in carrier configuration.
    pub const NR_AVAILABILITY: ApiLevel = ApiLevel(31);

    /// First level with cross-SIM calling configuration.
    pub const CROSS_SIM: ApiLevel = ApiLevel(33);

    /// First level with the VoNR user-visibility flag.
    pub const VONR_VISIBILITY: ApiLevel = ApiLevel(34);

    /// Returns true if this level is at or past `min`.
    pub fn supports(&self, min: ApiLevel) -> bool {
        *self >= min
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ApiLevel {
    fn from(level: u32) -> Self {
        ApiLevel(level)
    }
}

/// Calling convention required by the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolEra {
    /// Pre-persistent-override convention. Override publishing goes through
    /// the dynamic method surface and failures are absorbed; configuration
    /// reads open a fresh endpoint per call.
    Legacy,

    /// Persistent-override convention. Typed calls with an explicit persist
    /// flag; configuration reads carry the caller identity package.
    Modern,
}

impl ProtocolEra {
    /// Derive the era for a platform level.
    pub fn from_api(level: ApiLevel) -> Self {
        if level.supports(ApiLevel::PERSISTENT_OVERRIDES) {
            ProtocolEra::Modern
        } else {
            ProtocolEra::Legacy
        }
    }
}

impl fmt::Display for ProtocolEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolEra::Legacy => write!(f, "legacy"),
            ProtocolEra::Modern => write!(f, "modern"),
        }
    }
}

/// Source of the running platform level.
///
/// Implementations report the level of the device the client is talking to.
/// Probes are consulted lazily, once per versioned operation, so a client
/// built before the level is known still dispatches correctly.
pub trait VersionProbe: Send + Sync {
    /// The platform level currently in effect.
    fn api_level(&self) -> ApiLevel;
}

/// Fixed-level probe for embedders that know their platform up front, and
/// for tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticVersion(pub ApiLevel);

impl StaticVersion {
    /// Probe pinned to the given level.
    pub fn new(level: impl Into<ApiLevel>) -> Self {
        StaticVersion(level.into())
    }
}

impl VersionProbe for StaticVersion {
    fn api_level(&self) -> ApiLevel {
        self.0
    }
}
