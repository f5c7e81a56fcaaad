//! Client façade: device-wide queries and per-subscription override sessions.
//!
//! [`CarrierClient`] is the composition root. It owns the interface cache and
//! the version probe, answers device-wide questions (subscription listings,
//! defaults), and hands out [`SubscriptionSession`]s bound to one
//! subscription.
//!
//! Failure surface:
//!
//! - Device-wide queries and every mutator return [`Result`]; resolution
//!   failures and modern-era call failures are surfaced.
//! - Per-subscription reads never fail. An invalid subscription ID
//!   short-circuits before any remote call, and any resolution or call
//!   failure degrades to the read's documented default (`false`, `""`, `-1`,
//!   empty sequence). The failure is logged at debug level; callers that need
//!   to distinguish "off" from "unreadable" must check
//!   [`SubscriptionId::is_valid`] and resolve interfaces up front.
//!
//! # Example
//!
//! ```ignore
//! use cc_core::{CarrierClient, StaticVersion};
//!
//! let client = CarrierClient::new(broker, StaticVersion::new(34));
//! let sub = client.default_subscription_id()?;
//! let session = client.session(sub);
//!
//! if !session.volte_enabled() {
//!     session.set_value("carrier_volte_available_bool", true)?;
//! }
//! ```

pub mod facts;

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::remote::{CapabilityProvider, SubscriptionInfo};
use crate::resolve::Interfaces;
use cc_bundle::{ConfigBundle, ConfigValue};
use cc_common::{ApiLevel, SlotIndex, SubscriptionId, VersionProbe};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Entry point to the configuration subsystem.
///
/// Cheap to clone; clones share the interface cache and the version probe.
#[derive(Clone)]
pub struct CarrierClient {
    interfaces: Arc<Interfaces>,
    probe: Arc<dyn VersionProbe>,
}

impl CarrierClient {
    /// Build a client over a capability broker and a version probe.
    ///
    /// Nothing is resolved here; interfaces are opened lazily on first use
    /// and the probe is consulted per operation.
    pub fn new(
        provider: impl CapabilityProvider + 'static,
        probe: impl VersionProbe + 'static,
    ) -> Self {
        Self {
            interfaces: Arc::new(Interfaces::new(Box::new(provider))),
            probe: Arc::new(probe),
        }
    }

    /// Platform level reported by the probe right now.
    pub fn api_level(&self) -> ApiLevel {
        self.probe.api_level()
    }

    /// Active subscriptions on the device.
    pub fn subscriptions(&self) -> Result<Vec<SubscriptionInfo>> {
        self.dispatcher().active_subscriptions()
    }

    /// The device default subscription.
    pub fn default_subscription_id(&self) -> Result<SubscriptionId> {
        Ok(self
            .interfaces
            .subscription_registry()?
            .default_subscription_id()?)
    }

    /// Subscription currently held by a physical slot, if any.
    pub fn subscription_in_slot(&self, slot: SlotIndex) -> Result<Option<SubscriptionInfo>> {
        Ok(self
            .interfaces
            .subscription_registry()?
            .subscription_in_slot(slot)?)
    }

    /// Session bound to `sub`, sharing this client's cache and probe.
    pub fn session(&self, sub: SubscriptionId) -> SubscriptionSession {
        SubscriptionSession {
            interfaces: Arc::clone(&self.interfaces),
            probe: Arc::clone(&self.probe),
            sub,
        }
    }

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.interfaces, self.probe.as_ref())
    }
}

impl fmt::Debug for CarrierClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierClient")
            .field("api_level", &self.probe.api_level())
            .finish_non_exhaustive()
    }
}

/// Override session for one subscription.
///
/// Mutators publish a fresh single-entry override bundle per call and return
/// `Result`; invoking them on an invalid subscription is a caller contract
/// violation (checked with `debug_assert!`). Readers are total and degrade to
/// defaults as described on [`CarrierClient`].
#[derive(Clone)]
pub struct SubscriptionSession {
    interfaces: Arc<Interfaces>,
    probe: Arc<dyn VersionProbe>,
    sub: SubscriptionId,
}

impl SubscriptionSession {
    /// The subscription this session is bound to.
    pub fn subscription_id(&self) -> SubscriptionId {
        self.sub
    }

    /// Platform level reported by the probe right now.
    pub fn api_level(&self) -> ApiLevel {
        self.probe.api_level()
    }

    // ---- mutators -------------------------------------------------------

    /// Override a single configuration value.
    ///
    /// Accepts any of the eight bundle kinds through `Into<ConfigValue>`.
    /// On modern platforms the override persists across restarts; on legacy
    /// platforms a refused call is absorbed (see [`crate::dispatch`]).
    pub fn set_value(&self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Result<()> {
        debug_assert!(
            self.sub.is_valid(),
            "set_value on invalid subscription {}",
            self.sub
        );
        let key = key.into();
        let value = value.into();
        debug!(subscription = %self.sub, key = %key, kind = value.kind(), "overriding configuration value");
        let mut overrides = ConfigBundle::new();
        overrides.set(key, value);
        self.dispatcher().publish_override(self.sub, Some(overrides))
    }

    /// Drop every override for this subscription, reverting it to platform
    /// defaults.
    pub fn clear_overrides(&self) -> Result<()> {
        debug_assert!(
            self.sub.is_valid(),
            "clear_overrides on invalid subscription {}",
            self.sub
        );
        debug!(subscription = %self.sub, "clearing configuration overrides");
        self.dispatcher().publish_override(self.sub, None)
    }

    /// Tear down and re-establish IMS registration for this subscription's
    /// slot, forcing re-evaluation of the effective configuration.
    pub fn restart_ims_registration(&self) -> Result<()> {
        debug_assert!(
            self.sub.is_valid(),
            "restart_ims_registration on invalid subscription {}",
            self.sub
        );
        let slot = self
            .interfaces
            .subscription_registry()?
            .slot_index(self.sub)?;
        debug!(subscription = %self.sub, slot = %slot, "restarting IMS registration");
        self.interfaces.telephony()?.reset_ims(slot)?;
        Ok(())
    }

    // ---- configuration value reads --------------------------------------

    /// Boolean configuration value. Unavailable reads as `false`.
    pub fn bool_value(&self, key: &str) -> bool {
        self.read_or(key, false, |bundle| bundle.get_bool(key))
    }

    /// String configuration value. Unavailable reads as `""`.
    pub fn string_value(&self, key: &str) -> String {
        self.read_or(key, String::new(), |bundle| bundle.get_string(key))
    }

    /// 32-bit integer configuration value. Unavailable reads as `-1`; a
    /// reachable bundle without the key reads as `0`.
    pub fn i32_value(&self, key: &str) -> i32 {
        self.read_or(key, -1, |bundle| bundle.get_i32(key))
    }

    /// 64-bit integer configuration value. Unavailable reads as `-1`; a
    /// reachable bundle without the key reads as `0`.
    pub fn i64_value(&self, key: &str) -> i64 {
        self.read_or(key, -1, |bundle| bundle.get_i64(key))
    }

    /// Boolean sequence configuration value. Unavailable reads as empty.
    pub fn bool_seq_value(&self, key: &str) -> Vec<bool> {
        self.read_or(key, Vec::new(), |bundle| bundle.get_bool_seq(key))
    }

    /// String sequence configuration value. Unavailable reads as empty.
    pub fn string_seq_value(&self, key: &str) -> Vec<String> {
        self.read_or(key, Vec::new(), |bundle| bundle.get_string_seq(key))
    }

    /// 32-bit integer sequence configuration value. Unavailable reads as
    /// empty.
    pub fn i32_seq_value(&self, key: &str) -> Vec<i32> {
        self.read_or(key, Vec::new(), |bundle| bundle.get_i32_seq(key))
    }

    /// 64-bit integer sequence configuration value. Unavailable reads as
    /// empty.
    pub fn i64_seq_value(&self, key: &str) -> Vec<i64> {
        self.read_or(key, Vec::new(), |bundle| bundle.get_i64_seq(key))
    }

    /// Untyped configuration value; `None` when the key is absent or the
    /// read is unavailable.
    pub fn value(&self, key: &str) -> Option<ConfigValue> {
        self.read_or(key, None, |bundle| bundle.get(key).cloned())
    }

    // ---- pass-through reads ---------------------------------------------

    /// Physical slot holding this subscription. Unavailable reads as
    /// [`SlotIndex::INVALID`].
    pub fn slot_index(&self) -> SlotIndex {
        self.remote_or("slot_index", SlotIndex::INVALID, || {
            Ok(self
                .interfaces
                .subscription_registry()?
                .slot_index(self.sub)?)
        })
    }

    /// Carrier display name. Unavailable reads as `""`.
    pub fn carrier_name(&self) -> String {
        self.remote_or("carrier_name", String::new(), || {
            Ok(self
                .interfaces
                .telephony()?
                .carrier_name(self.sub)?
                .unwrap_or_default())
        })
    }

    /// Subscriber identity (IMSI). Unavailable reads as `""`.
    pub fn subscriber_id(&self) -> String {
        self.remote_or("subscriber_id", String::new(), || {
            Ok(self
                .interfaces
                .subscriber_info()?
                .subscriber_id(self.sub)?
                .unwrap_or_default())
        })
    }

    /// Whether the IMS stack currently holds a registration for this
    /// subscription. Queried live, never cached. Unavailable reads as
    /// `false`.
    pub fn ims_registered(&self) -> bool {
        self.remote_or("ims_registered", false, || {
            Ok(self
                .interfaces
                .telephony()?
                .is_ims_registered(self.sub)?)
        })
    }

    // ---- plumbing -------------------------------------------------------

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.interfaces, self.probe.as_ref())
    }

    /// Fetch the resolved configuration and extract one value, degrading to
    /// `fallback` when the subscription is invalid or the fetch fails.
    fn read_or<T>(&self, key: &str, fallback: T, extract: impl FnOnce(&ConfigBundle) -> T) -> T {
        if !self.sub.is_valid() {
            debug!(subscription = %self.sub, key, "invalid subscription, returning default");
            return fallback;
        }
        match self.dispatcher().resolved_config(self.sub) {
            Ok(bundle) => extract(&bundle),
            Err(err) => {
                debug!(subscription = %self.sub, key, error = %err, "configuration read failed, returning default");
                fallback
            }
        }
    }

    /// Run a non-bundle remote read, degrading to `fallback` when the
    /// subscription is invalid or the read fails.
    fn remote_or<T>(&self, what: &str, fallback: T, read: impl FnOnce() -> Result<T>) -> T {
        if !self.sub.is_valid() {
            debug!(subscription = %self.sub, read = what, "invalid subscription, returning default");
            return fallback;
        }
        match read() {
            Ok(value) => value,
            Err(err) => {
                debug!(subscription = %self.sub, read = what, error = %err, "read failed, returning default");
                fallback
            }
        }
    }
}

impl fmt::Debug for SubscriptionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionSession")
            .field("subscription", &self.sub)
            .finish_non_exhaustive()
    }
}
