//! Privileged telephony configuration client.
//!
//! This library gives an elevated local agent typed access to the device's
//! telephony configuration subsystem:
//! - Capability brokering and the raw remote call model
//! - Lazy per-role interface resolution with process-wide caching
//! - Version-aware dispatch across the two configuration protocol eras
//! - Per-subscription override sessions with total, default-degrading reads
//!
//! The capability broker itself is external; embedders supply a
//! [`CapabilityProvider`] implementation and a [`VersionProbe`] for the
//! running platform.

pub mod dispatch;
pub mod error;
pub mod remote;
pub mod resolve;
pub mod session;

pub use cc_bundle::{ConfigBundle, ConfigValue};
pub use cc_common::{
    keys, ApiLevel, ProtocolEra, SlotIndex, StaticVersion, SubscriptionId, VersionProbe,
};
pub use error::{Error, Result};
pub use remote::{
    CallArg, CallError, CallReply, CapabilityProvider, InterfaceRole, ProviderError,
    ServiceEndpoint, SubscriptionInfo,
};
pub use resolve::Interfaces;
pub use session::{CarrierClient, SubscriptionSession};
