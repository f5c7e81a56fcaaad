//! Typed per-role proxies over raw service endpoints.
//!
//! Each proxy owns a shared raw endpoint and exposes the statically-typed
//! call shapes of the current platform generation. Callers needing an older
//! dynamic shape go through [`raw`](ConfigOverrideProxy::raw) and invoke by
//! name. Reply coercion is strict: a reply of the wrong kind becomes
//! [`CallError::UnexpectedReply`] rather than a default.

use super::{
    CallArg, CallError, CallReply, ServiceEndpoint, SubscriptionInfo, METHOD_ACTIVE_SUBSCRIPTIONS,
    METHOD_CARRIER_NAME, METHOD_DEFAULT_CARRIER_PACKAGE, METHOD_DEFAULT_SUB_ID,
    METHOD_GET_CONFIG_WITH_FEATURE, METHOD_IS_IMS_REGISTERED, METHOD_OVERRIDE_CONFIG,
    METHOD_RESET_IMS, METHOD_SLOT_INDEX, METHOD_SUBSCRIBER_ID, METHOD_SUBSCRIPTION_FOR_SLOT,
};
use cc_bundle::ConfigBundle;
use cc_common::{SlotIndex, SubscriptionId};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

fn expect_none(method: &str, reply: CallReply) -> Result<(), CallError> {
    match reply {
        CallReply::None => Ok(()),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "none",
        }),
    }
}

fn expect_bool(method: &str, reply: CallReply) -> Result<bool, CallError> {
    match reply {
        CallReply::Bool(v) => Ok(v),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "bool",
        }),
    }
}

fn expect_i32(method: &str, reply: CallReply) -> Result<i32, CallError> {
    match reply {
        CallReply::I32(v) => Ok(v),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "i32",
        }),
    }
}

fn expect_str(method: &str, reply: CallReply) -> Result<Option<String>, CallError> {
    match reply {
        CallReply::Str(v) => Ok(v),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "str",
        }),
    }
}

fn expect_bundle(method: &str, reply: CallReply) -> Result<ConfigBundle, CallError> {
    match reply {
        CallReply::Bundle(v) => Ok(v),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "bundle",
        }),
    }
}

fn expect_subscriptions(
    method: &str,
    reply: CallReply,
) -> Result<Vec<SubscriptionInfo>, CallError> {
    match reply {
        CallReply::Subscriptions(v) => Ok(v),
        _ => Err(CallError::UnexpectedReply {
            method: method.to_string(),
            expected: "subscriptions",
        }),
    }
}

/// Typed handle to the configuration override loader.
#[derive(Clone)]
pub struct ConfigOverrideProxy {
    endpoint: Arc<dyn ServiceEndpoint>,
}

impl ConfigOverrideProxy {
    pub fn new(endpoint: Arc<dyn ServiceEndpoint>) -> Self {
        Self { endpoint }
    }

    /// The raw endpoint, for dynamic-shape dispatch.
    pub fn raw(&self) -> &Arc<dyn ServiceEndpoint> {
        &self.endpoint
    }

    /// Publish (or, with `None`, clear) the override bundle for a
    /// subscription. `persist` keeps the override across restarts.
    pub fn override_config(
        &self,
        sub: SubscriptionId,
        overrides: Option<ConfigBundle>,
        persist: bool,
    ) -> Result<(), CallError> {
        debug!(subscription = %sub, persist, clearing = overrides.is_none(), "publishing override bundle");
        let reply = self.endpoint.invoke(
            METHOD_OVERRIDE_CONFIG,
            &[
                CallArg::I32(sub.0),
                CallArg::Bundle(overrides),
                CallArg::Bool(persist),
            ],
        )?;
        expect_none(METHOD_OVERRIDE_CONFIG, reply)
    }

    /// Resolved configuration for a subscription as seen by `caller`.
    pub fn config_for_subscription(
        &self,
        sub: SubscriptionId,
        caller: Option<&str>,
        feature: &str,
    ) -> Result<ConfigBundle, CallError> {
        debug!(subscription = %sub, caller, "reading resolved configuration");
        let reply = self.endpoint.invoke(
            METHOD_GET_CONFIG_WITH_FEATURE,
            &[
                CallArg::I32(sub.0),
                CallArg::Str(caller.map(str::to_string)),
                CallArg::Str(Some(feature.to_string())),
            ],
        )?;
        expect_bundle(METHOD_GET_CONFIG_WITH_FEATURE, reply)
    }

    /// Package name to present as caller identity on configuration reads.
    pub fn default_carrier_service_package(&self) -> Result<Option<String>, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_DEFAULT_CARRIER_PACKAGE, &[])?;
        expect_str(METHOD_DEFAULT_CARRIER_PACKAGE, reply)
    }
}

impl fmt::Debug for ConfigOverrideProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrideProxy")
            .field("service", &self.endpoint.service())
            .finish()
    }
}

/// Typed handle to the telephony control interface.
#[derive(Clone)]
pub struct TelephonyProxy {
    endpoint: Arc<dyn ServiceEndpoint>,
}

impl TelephonyProxy {
    pub fn new(endpoint: Arc<dyn ServiceEndpoint>) -> Self {
        Self { endpoint }
    }

    /// The raw endpoint, for dynamic-shape dispatch.
    pub fn raw(&self) -> &Arc<dyn ServiceEndpoint> {
        &self.endpoint
    }

    /// Whether the IMS stack currently holds a registration for `sub`.
    pub fn is_ims_registered(&self, sub: SubscriptionId) -> Result<bool, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_IS_IMS_REGISTERED, &[CallArg::I32(sub.0)])?;
        expect_bool(METHOD_IS_IMS_REGISTERED, reply)
    }

    /// Tear down and re-establish the IMS stack for a slot.
    pub fn reset_ims(&self, slot: SlotIndex) -> Result<(), CallError> {
        debug!(slot = %slot, "resetting IMS stack");
        let reply = self
            .endpoint
            .invoke(METHOD_RESET_IMS, &[CallArg::I32(slot.0)])?;
        expect_none(METHOD_RESET_IMS, reply)
    }

    /// Carrier display name for `sub`, if the platform reports one.
    pub fn carrier_name(&self, sub: SubscriptionId) -> Result<Option<String>, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_CARRIER_NAME, &[CallArg::I32(sub.0)])?;
        expect_str(METHOD_CARRIER_NAME, reply)
    }
}

impl fmt::Debug for TelephonyProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelephonyProxy")
            .field("service", &self.endpoint.service())
            .finish()
    }
}

/// Typed handle to the subscriber identity interface.
#[derive(Clone)]
pub struct SubscriberInfoProxy {
    endpoint: Arc<dyn ServiceEndpoint>,
}

impl SubscriberInfoProxy {
    pub fn new(endpoint: Arc<dyn ServiceEndpoint>) -> Self {
        Self { endpoint }
    }

    /// The raw endpoint, for dynamic-shape dispatch.
    pub fn raw(&self) -> &Arc<dyn ServiceEndpoint> {
        &self.endpoint
    }

    /// Subscriber identity (IMSI) for `sub`, when readable.
    pub fn subscriber_id(&self, sub: SubscriptionId) -> Result<Option<String>, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_SUBSCRIBER_ID, &[CallArg::I32(sub.0)])?;
        expect_str(METHOD_SUBSCRIBER_ID, reply)
    }
}

impl fmt::Debug for SubscriberInfoProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberInfoProxy")
            .field("service", &self.endpoint.service())
            .finish()
    }
}

/// Typed handle to the subscription registry.
#[derive(Clone)]
pub struct SubscriptionRegistryProxy {
    endpoint: Arc<dyn ServiceEndpoint>,
}

impl SubscriptionRegistryProxy {
    pub fn new(endpoint: Arc<dyn ServiceEndpoint>) -> Self {
        Self { endpoint }
    }

    /// The raw endpoint, for dynamic-shape dispatch.
    pub fn raw(&self) -> &Arc<dyn ServiceEndpoint> {
        &self.endpoint
    }

    /// Active subscriptions, modern two-argument shape.
    pub fn active_subscriptions(
        &self,
        caller: Option<&str>,
        feature: Option<&str>,
    ) -> Result<Vec<SubscriptionInfo>, CallError> {
        let reply = self.endpoint.invoke(
            METHOD_ACTIVE_SUBSCRIPTIONS,
            &[
                CallArg::Str(caller.map(str::to_string)),
                CallArg::Str(feature.map(str::to_string)),
            ],
        )?;
        expect_subscriptions(METHOD_ACTIVE_SUBSCRIPTIONS, reply)
    }

    /// Subscription currently held by a physical slot, if any.
    pub fn subscription_in_slot(
        &self,
        slot: SlotIndex,
    ) -> Result<Option<SubscriptionInfo>, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_SUBSCRIPTION_FOR_SLOT, &[CallArg::I32(slot.0)])?;
        match reply {
            CallReply::None => Ok(None),
            CallReply::Subscriptions(v) => Ok(v.into_iter().next()),
            _ => Err(CallError::UnexpectedReply {
                method: METHOD_SUBSCRIPTION_FOR_SLOT.to_string(),
                expected: "subscriptions or none",
            }),
        }
    }

    /// The device default subscription.
    pub fn default_subscription_id(&self) -> Result<SubscriptionId, CallError> {
        let reply = self.endpoint.invoke(METHOD_DEFAULT_SUB_ID, &[])?;
        expect_i32(METHOD_DEFAULT_SUB_ID, reply).map(SubscriptionId)
    }

    /// Physical slot for a subscription.
    pub fn slot_index(&self, sub: SubscriptionId) -> Result<SlotIndex, CallError> {
        let reply = self
            .endpoint
            .invoke(METHOD_SLOT_INDEX, &[CallArg::I32(sub.0)])?;
        expect_i32(METHOD_SLOT_INDEX, reply).map(SlotIndex)
    }
}

impl fmt::Debug for SubscriptionRegistryProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionRegistryProxy")
            .field("service", &self.endpoint.service())
            .finish()
    }
}
