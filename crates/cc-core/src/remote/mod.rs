//! Remote interface surface: capability brokering and the raw call model.
//!
//! The platform exposes its telephony services through a restricted IPC
//! surface reachable only via an elevated-rights broker. This module models
//! that surface:
//!
//! - [`CapabilityProvider`] is the broker seam: it exchanges a well-known
//!   service name for a raw interface handle.
//! - [`ServiceEndpoint`] is the raw handle: a name-plus-arguments calling
//!   convention over [`CallArg`] / [`CallReply`] unions. Which methods a
//!   given endpoint accepts, and with which argument shapes, depends on the
//!   platform build behind it.
//! - Typed per-role proxies over endpoints live in [`proxy`].
//!
//! Transport concerns (wire format, timeouts, cancellation) stay behind the
//! endpoint; calls here are synchronous and blocking.

pub mod proxy;

use cc_bundle::ConfigBundle;
use cc_common::{SlotIndex, SubscriptionId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Service name for the configuration override loader.
pub const SERVICE_CONFIG_OVERRIDE: &str = "configuration-override";

/// Service name for the telephony control interface.
pub const SERVICE_TELEPHONY: &str = "telephony";

/// Service name for the subscriber identity interface.
pub const SERVICE_SUBSCRIBER_INFO: &str = "subscriber-info";

/// Service name for the subscription registry.
pub const SERVICE_SUBSCRIPTION_REGISTRY: &str = "subscription-registry";

/// Override publishing, two-argument legacy shape or three-argument persist
/// shape.
pub const METHOD_OVERRIDE_CONFIG: &str = "overrideConfig";

/// Legacy resolved-configuration read (subscription only).
pub const METHOD_GET_CONFIG_FOR_SUB_ID: &str = "getConfigForSubId";

/// Modern resolved-configuration read (subscription, caller package, feature
/// tag).
pub const METHOD_GET_CONFIG_WITH_FEATURE: &str = "getConfigForSubIdWithFeature";

/// Caller-identity package used for modern configuration reads.
pub const METHOD_DEFAULT_CARRIER_PACKAGE: &str = "getDefaultCarrierServicePackageName";

/// Subscription listing; two optional-string arguments on modern builds, a
/// single nullable argument on older ones.
pub const METHOD_ACTIVE_SUBSCRIPTIONS: &str = "getActiveSubscriptionInfoList";

/// Subscription lookup by physical slot.
pub const METHOD_SUBSCRIPTION_FOR_SLOT: &str = "getActiveSubscriptionInfoForSimSlotIndex";

/// Device default subscription.
pub const METHOD_DEFAULT_SUB_ID: &str = "getDefaultSubId";

/// Slot index for a subscription.
pub const METHOD_SLOT_INDEX: &str = "getSlotIndex";

/// IMS stack restart for a slot.
pub const METHOD_RESET_IMS: &str = "resetIms";

/// Live IMS registration state for a subscription.
pub const METHOD_IS_IMS_REGISTERED: &str = "isImsRegistered";

/// Carrier display name for a subscription.
pub const METHOD_CARRIER_NAME: &str = "getSubscriptionCarrierName";

/// Subscriber identity (IMSI) for a subscription.
pub const METHOD_SUBSCRIBER_ID: &str = "getSubscriberIdForSubscriber";

/// The four remote interface roles the client resolves.
///
/// Each role maps to exactly one well-known service name and is cached
/// independently (at most one live handle per role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceRole {
    ConfigOverride,
    Telephony,
    SubscriberInfo,
    SubscriptionRegistry,
}

impl InterfaceRole {
    /// The broker service name for this role.
    pub fn service_name(&self) -> &'static str {
        match self {
            InterfaceRole::ConfigOverride => SERVICE_CONFIG_OVERRIDE,
            InterfaceRole::Telephony => SERVICE_TELEPHONY,
            InterfaceRole::SubscriberInfo => SERVICE_SUBSCRIBER_INFO,
            InterfaceRole::SubscriptionRegistry => SERVICE_SUBSCRIPTION_REGISTRY,
        }
    }
}

impl fmt::Display for InterfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

/// Argument to a remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    I32(i32),
    Bool(bool),
    /// Nullable string argument; `None` crosses the wire as null.
    Str(Option<String>),
    /// Configuration bundle argument; `None` means "clear".
    Bundle(Option<ConfigBundle>),
}

/// Reply from a remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallReply {
    None,
    Bool(bool),
    I32(i32),
    Str(Option<String>),
    Bundle(ConfigBundle),
    Subscriptions(Vec<SubscriptionInfo>),
}

impl CallReply {
    /// Stable reply-kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CallReply::None => "none",
            CallReply::Bool(_) => "bool",
            CallReply::I32(_) => "i32",
            CallReply::Str(_) => "str",
            CallReply::Bundle(_) => "bundle",
            CallReply::Subscriptions(_) => "subscriptions",
        }
    }
}

/// Errors surfaced by a remote call.
#[derive(Debug, Error)]
pub enum CallError {
    /// The running build's interface lacks the method, or has it with an
    /// incompatible argument shape. Dispatch layers use this to fall back to
    /// older call shapes.
    #[error("method not found on remote interface: {method}")]
    MethodNotFound { method: String },

    #[error("remote service rejected {method}: {reason}")]
    Rejected { method: String, reason: String },

    #[error("unexpected reply to {method}: expected {expected}")]
    UnexpectedReply {
        method: String,
        expected: &'static str,
    },

    #[error("transport failure: {reason}")]
    Transport { reason: String },
}

/// Errors surfaced by the capability broker.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("access denied opening service: {0}")]
    AccessDenied(String),

    #[error("capability provider unavailable: {0}")]
    Unavailable(String),
}

/// Raw remote interface handle obtained from the broker.
///
/// Implementations marshal the call onto the restricted IPC surface.
/// Endpoints are cheap to share and must tolerate concurrent calls.
pub trait ServiceEndpoint: Send + Sync {
    /// The service name this endpoint was opened for.
    fn service(&self) -> &str;

    /// Invoke `method` with `args` and return its reply.
    fn invoke(&self, method: &str, args: &[CallArg]) -> Result<CallReply, CallError>;
}

/// External elevated-rights broker that exchanges a service name for a raw
/// interface handle.
///
/// Opening a service is comparatively expensive and may prompt the platform
/// for rights, so callers cache the handles they obtain (see
/// [`crate::resolve::Interfaces`]).
pub trait CapabilityProvider: Send + Sync {
    /// Open a raw endpoint for `service`.
    fn open(&self, service: &str) -> Result<Box<dyn ServiceEndpoint>, ProviderError>;
}

/// Minimal subscription record carried by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    /// Subscription ID.
    pub id: SubscriptionId,

    /// Physical slot currently holding the subscription.
    pub slot: SlotIndex,

    /// Operator-facing display name, when the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SubscriptionInfo {
    /// Record with id and slot only.
    pub fn new(id: impl Into<SubscriptionId>, slot: impl Into<SlotIndex>) -> Self {
        SubscriptionInfo {
            id: id.into(),
            slot: slot.into(),
            display_name: None,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
