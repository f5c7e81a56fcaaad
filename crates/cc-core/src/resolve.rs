//! Lazy per-role interface resolution and caching.
//!
//! Opening a service through the capability broker is expensive and may
//! prompt the platform, so each role is resolved at most once per client and
//! the typed proxy is kept for the life of the client. The cache protocol:
//!
//! - Each role has its own slot; resolving one role never blocks another.
//! - No lock is held across a broker call. Under concurrent first use a role
//!   may be resolved twice; the first insert wins and the redundant handle is
//!   dropped, so handle identity is stable once a slot is populated.
//! - A failed resolution leaves its slot empty. The next call retries.
//!
//! There is no teardown: handles live until the owning client is dropped.

use crate::error::{Error, Result};
use crate::remote::proxy::{
    ConfigOverrideProxy, SubscriberInfoProxy, SubscriptionRegistryProxy, TelephonyProxy,
};
use crate::remote::{CapabilityProvider, InterfaceRole, ServiceEndpoint};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// One slot per interface role.
#[derive(Default)]
struct InterfaceCache {
    config_override: Mutex<Option<Arc<ConfigOverrideProxy>>>,
    telephony: Mutex<Option<Arc<TelephonyProxy>>>,
    subscriber_info: Mutex<Option<Arc<SubscriberInfoProxy>>>,
    subscription_registry: Mutex<Option<Arc<SubscriptionRegistryProxy>>>,
}

/// Resolver handing out cached typed proxies for the four interface roles.
pub struct Interfaces {
    provider: Box<dyn CapabilityProvider>,
    cache: InterfaceCache,
}

impl Interfaces {
    /// Wrap a capability broker. Nothing is resolved until first use.
    pub fn new(provider: Box<dyn CapabilityProvider>) -> Self {
        Self {
            provider,
            cache: InterfaceCache::default(),
        }
    }

    /// Cached handle to the configuration override loader.
    pub fn config_override(&self) -> Result<Arc<ConfigOverrideProxy>> {
        self.resolve(
            InterfaceRole::ConfigOverride,
            &self.cache.config_override,
            ConfigOverrideProxy::new,
        )
    }

    /// Cached handle to the telephony control interface.
    pub fn telephony(&self) -> Result<Arc<TelephonyProxy>> {
        self.resolve(
            InterfaceRole::Telephony,
            &self.cache.telephony,
            TelephonyProxy::new,
        )
    }

    /// Cached handle to the subscriber identity interface.
    pub fn subscriber_info(&self) -> Result<Arc<SubscriberInfoProxy>> {
        self.resolve(
            InterfaceRole::SubscriberInfo,
            &self.cache.subscriber_info,
            SubscriberInfoProxy::new,
        )
    }

    /// Cached handle to the subscription registry.
    pub fn subscription_registry(&self) -> Result<Arc<SubscriptionRegistryProxy>> {
        self.resolve(
            InterfaceRole::SubscriptionRegistry,
            &self.cache.subscription_registry,
            SubscriptionRegistryProxy::new,
        )
    }

    /// Uncached handle to the configuration override loader.
    ///
    /// Older platform builds tie resolved-configuration reads to connection
    /// state, so the legacy read path opens a fresh endpoint per call instead
    /// of going through the cache.
    pub fn fresh_config_override(&self) -> Result<ConfigOverrideProxy> {
        let endpoint = self.open(InterfaceRole::ConfigOverride)?;
        Ok(ConfigOverrideProxy::new(Arc::from(endpoint)))
    }

    fn resolve<P>(
        &self,
        role: InterfaceRole,
        slot: &Mutex<Option<Arc<P>>>,
        wrap: impl FnOnce(Arc<dyn ServiceEndpoint>) -> P,
    ) -> Result<Arc<P>> {
        if let Some(handle) = slot.lock().unwrap().as_ref() {
            return Ok(Arc::clone(handle));
        }
        // Resolve outside the lock; a concurrent caller may beat us to the
        // insert below, in which case its handle wins and ours is dropped.
        let endpoint = self.open(role)?;
        let handle = Arc::new(wrap(Arc::from(endpoint)));
        let mut guard = slot.lock().unwrap();
        Ok(Arc::clone(guard.get_or_insert(handle)))
    }

    fn open(&self, role: InterfaceRole) -> Result<Box<dyn ServiceEndpoint>> {
        let service = role.service_name();
        match self.provider.open(service) {
            Ok(endpoint) => {
                debug!(service, "resolved remote interface");
                Ok(endpoint)
            }
            Err(err) => {
                warn!(service, error = %err, "interface resolution failed");
                Err(Error::resolve(service, err))
            }
        }
    }
}

impl fmt::Debug for Interfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interfaces").finish_non_exhaustive()
    }
}
