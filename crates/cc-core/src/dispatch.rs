//! Version-aware dispatch of configuration operations.
//!
//! The platform changed its configuration calling conventions at
//! [`ApiLevel::PERSISTENT_OVERRIDES`](cc_common::ApiLevel::PERSISTENT_OVERRIDES).
//! The dispatcher consults a
//! [`VersionProbe`] per operation, derives the [`ProtocolEra`], and routes
//! each logical operation to the right call shape:
//!
//! - Override publishing: typed three-argument persist call on modern
//!   builds; dynamic two-argument call on legacy builds, where an invocation
//!   failure is logged and absorbed (the override is silently not applied).
//! - Resolved-configuration reads: typed caller-identity read through the
//!   cached handle on modern builds; a fresh uncached handle and the dynamic
//!   single-argument read on legacy builds.
//! - Subscription listings: typed two-argument shape, falling back to the
//!   dynamic single-argument shape when the build's interface lacks it.

use crate::error::{Error, Result};
use crate::remote::proxy::SubscriptionRegistryProxy;
use crate::remote::{
    CallArg, CallError, CallReply, SubscriptionInfo, METHOD_ACTIVE_SUBSCRIPTIONS,
    METHOD_GET_CONFIG_FOR_SUB_ID, METHOD_OVERRIDE_CONFIG,
};
use crate::resolve::Interfaces;
use cc_bundle::ConfigBundle;
use cc_common::{ProtocolEra, SubscriptionId, VersionProbe};
use std::fmt;
use tracing::{debug, warn};

/// Listing call shapes, newest first. Extending to a further platform
/// generation means appending a shape here and teaching
/// [`ListingShape::call`] its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListingShape {
    /// Caller package + feature tag, both nullable.
    TwoArg,
    /// Single nullable caller argument, dynamic dispatch.
    SingleArg,
}

impl ListingShape {
    const ALL: [ListingShape; 2] = [ListingShape::TwoArg, ListingShape::SingleArg];

    fn name(self) -> &'static str {
        match self {
            ListingShape::TwoArg => "two_arg",
            ListingShape::SingleArg => "single_arg",
        }
    }

    fn call(
        self,
        registry: &SubscriptionRegistryProxy,
    ) -> std::result::Result<Vec<SubscriptionInfo>, CallError> {
        match self {
            ListingShape::TwoArg => registry.active_subscriptions(None, None),
            ListingShape::SingleArg => {
                let reply = registry
                    .raw()
                    .invoke(METHOD_ACTIVE_SUBSCRIPTIONS, &[CallArg::Str(None)])?;
                match reply {
                    CallReply::Subscriptions(subs) => Ok(subs),
                    _ => Err(CallError::UnexpectedReply {
                        method: METHOD_ACTIVE_SUBSCRIPTIONS.to_string(),
                        expected: "subscriptions",
                    }),
                }
            }
        }
    }
}

/// Routes logical operations to era-appropriate call shapes.
///
/// Holds no state of its own; the era is re-derived from the probe on every
/// operation so a client built before the platform level is known still
/// dispatches correctly.
pub struct Dispatcher<'a> {
    interfaces: &'a Interfaces,
    probe: &'a dyn VersionProbe,
}

impl<'a> Dispatcher<'a> {
    pub fn new(interfaces: &'a Interfaces, probe: &'a dyn VersionProbe) -> Self {
        Self { interfaces, probe }
    }

    fn era(&self) -> ProtocolEra {
        ProtocolEra::from_api(self.probe.api_level())
    }

    /// Publish `overrides` for a subscription, or clear all overrides when
    /// `overrides` is `None`.
    ///
    /// Resolution failures are always surfaced. On the modern era a rejected
    /// call is surfaced too; on the legacy era it is logged and absorbed, so
    /// the operation completes without the override taking effect.
    pub fn publish_override(
        &self,
        sub: SubscriptionId,
        overrides: Option<ConfigBundle>,
    ) -> Result<()> {
        let era = self.era();
        let handle = self.interfaces.config_override()?;
        match era {
            ProtocolEra::Modern => {
                // Persist flag is always set: overrides must survive restarts.
                handle.override_config(sub, overrides, true)?;
                Ok(())
            }
            ProtocolEra::Legacy => {
                let outcome = handle.raw().invoke(
                    METHOD_OVERRIDE_CONFIG,
                    &[CallArg::I32(sub.0), CallArg::Bundle(overrides)],
                );
                if let Err(err) = outcome {
                    warn!(
                        subscription = %sub,
                        method = METHOD_OVERRIDE_CONFIG,
                        error = %err,
                        "legacy override call failed, override not applied"
                    );
                }
                Ok(())
            }
        }
    }

    /// Resolved configuration for a subscription: platform defaults merged
    /// with any published overrides.
    pub fn resolved_config(&self, sub: SubscriptionId) -> Result<ConfigBundle> {
        match self.era() {
            ProtocolEra::Modern => {
                let handle = self.interfaces.config_override()?;
                let caller = handle.default_carrier_service_package()?;
                let bundle = handle.config_for_subscription(sub, caller.as_deref(), "")?;
                Ok(bundle)
            }
            ProtocolEra::Legacy => {
                // Legacy builds tie this read to connection state, so use a
                // fresh endpoint rather than the cached handle.
                let handle = self.interfaces.fresh_config_override()?;
                let reply = handle
                    .raw()
                    .invoke(METHOD_GET_CONFIG_FOR_SUB_ID, &[CallArg::I32(sub.0)])?;
                match reply {
                    CallReply::Bundle(bundle) => Ok(bundle),
                    _ => Err(Error::from(CallError::UnexpectedReply {
                        method: METHOD_GET_CONFIG_FOR_SUB_ID.to_string(),
                        expected: "bundle",
                    })),
                }
            }
        }
    }

    /// Active subscriptions on the device.
    ///
    /// Tries each listing shape newest-first; a shape whose method is absent
    /// falls through to the next, any other failure is surfaced as-is.
    pub fn active_subscriptions(&self) -> Result<Vec<SubscriptionInfo>> {
        let registry = self.interfaces.subscription_registry()?;
        let mut missing = Vec::new();
        for shape in ListingShape::ALL {
            match shape.call(&registry) {
                Ok(subs) => return Ok(subs),
                Err(CallError::MethodNotFound { method }) => {
                    debug!(shape = shape.name(), method, "listing shape not supported");
                    missing.push(method);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(CallError::MethodNotFound {
            method: missing
                .pop()
                .unwrap_or_else(|| METHOD_ACTIVE_SUBSCRIPTIONS.to_string()),
        }
        .into())
    }
}

impl fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("api_level", &self.probe.api_level())
            .finish_non_exhaustive()
    }
}
