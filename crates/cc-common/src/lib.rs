//! Shared vocabulary for the carrierctl workspace.
//!
//! This crate provides foundational types used by every other crate:
//! - Subscription and slot identity newtypes with validity sentinels
//! - Platform API levels, protocol eras, and the version probe seam
//! - Well-known configuration bundle key constants

pub mod id;
pub mod keys;
pub mod version;

pub use id::{SlotIndex, SubscriptionId};
pub use version::{ApiLevel, ProtocolEra, StaticVersion, VersionProbe};
