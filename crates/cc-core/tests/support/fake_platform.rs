//! In-memory fake of the device telephony subsystem.
//!
//! Models a broker plus the four services behind it, era-aware: the method
//! and argument shapes an endpoint accepts depend on the configured platform
//! level, published overrides merge into per-subscription state, and every
//! open and call is recorded for assertions.

#![allow(dead_code)]
// Test support intentionally provides more helpers than any single test uses.

use cc_core::remote::{
    CallArg, CallError, CallReply, CapabilityProvider, ProviderError, ServiceEndpoint,
    SubscriptionInfo, METHOD_ACTIVE_SUBSCRIPTIONS, METHOD_CARRIER_NAME,
    METHOD_DEFAULT_CARRIER_PACKAGE, METHOD_DEFAULT_SUB_ID, METHOD_GET_CONFIG_FOR_SUB_ID,
    METHOD_GET_CONFIG_WITH_FEATURE, METHOD_IS_IMS_REGISTERED, METHOD_OVERRIDE_CONFIG,
    METHOD_RESET_IMS, METHOD_SLOT_INDEX, METHOD_SUBSCRIBER_ID, METHOD_SUBSCRIPTION_FOR_SLOT,
    SERVICE_CONFIG_OVERRIDE, SERVICE_SUBSCRIBER_INFO, SERVICE_SUBSCRIPTION_REGISTRY,
    SERVICE_TELEPHONY,
};
use cc_core::{CarrierClient, ConfigBundle, ConfigValue, StaticVersion};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// One recorded remote invocation.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub service: String,
    pub method: String,
    pub args: Vec<CallArg>,
}

#[derive(Default)]
struct DeviceState {
    opens: Mutex<HashMap<String, usize>>,
    calls: Mutex<Vec<CallRecord>>,
    defaults: Mutex<HashMap<i32, ConfigBundle>>,
    overrides: Mutex<HashMap<i32, ConfigBundle>>,
    subscriptions: Mutex<Vec<SubscriptionInfo>>,
    default_sub: Mutex<i32>,
    carrier_names: Mutex<HashMap<i32, String>>,
    subscriber_ids: Mutex<HashMap<i32, String>>,
    ims_registered: Mutex<HashSet<i32>>,
    ims_resets: Mutex<Vec<i32>>,
    carrier_package: Mutex<Option<String>>,
    missing_methods: Mutex<HashSet<String>>,
    rejected_methods: Mutex<HashSet<String>>,
    two_arg_listing: Mutex<bool>,
    api_level: u32,
}

impl DeviceState {
    fn modern(&self) -> bool {
        self.api_level >= 30
    }

    fn record(&self, service: &str, method: &str, args: &[CallArg]) {
        self.calls.lock().unwrap().push(CallRecord {
            service: service.to_string(),
            method: method.to_string(),
            args: args.to_vec(),
        });
    }

    fn gate(&self, method: &str) -> Result<(), CallError> {
        if self.missing_methods.lock().unwrap().contains(method) {
            return Err(CallError::MethodNotFound {
                method: method.to_string(),
            });
        }
        if self.rejected_methods.lock().unwrap().contains(method) {
            return Err(CallError::Rejected {
                method: method.to_string(),
                reason: "refused by fake platform".to_string(),
            });
        }
        Ok(())
    }

    fn apply_override(&self, sub: i32, bundle: Option<&ConfigBundle>) {
        let mut overrides = self.overrides.lock().unwrap();
        match bundle {
            None => {
                overrides.remove(&sub);
            }
            Some(bundle) => {
                let slot = overrides.entry(sub).or_default();
                for (key, value) in bundle.iter() {
                    slot.set(key.clone(), value.clone());
                }
            }
        }
    }

    fn resolved(&self, sub: i32) -> ConfigBundle {
        let mut bundle = self
            .defaults
            .lock()
            .unwrap()
            .get(&sub)
            .cloned()
            .unwrap_or_default();
        if let Some(overrides) = self.overrides.lock().unwrap().get(&sub) {
            for (key, value) in overrides.iter() {
                bundle.set(key.clone(), value.clone());
            }
        }
        bundle
    }

    fn slot_of(&self, sub: i32) -> i32 {
        self.subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|info| info.id.0 == sub)
            .map(|info| info.slot.0)
            .unwrap_or(-1)
    }

    fn invoke_config_override(
        &self,
        method: &str,
        args: &[CallArg],
    ) -> Result<CallReply, CallError> {
        match (method, args) {
            (METHOD_OVERRIDE_CONFIG, [CallArg::I32(sub), CallArg::Bundle(b), CallArg::Bool(_)])
                if self.modern() =>
            {
                self.apply_override(*sub, b.as_ref());
                Ok(CallReply::None)
            }
            (METHOD_OVERRIDE_CONFIG, [CallArg::I32(sub), CallArg::Bundle(b)])
                if !self.modern() =>
            {
                self.apply_override(*sub, b.as_ref());
                Ok(CallReply::None)
            }
            (
                METHOD_GET_CONFIG_WITH_FEATURE,
                [CallArg::I32(sub), CallArg::Str(_), CallArg::Str(_)],
            ) if self.modern() => Ok(CallReply::Bundle(self.resolved(*sub))),
            (METHOD_GET_CONFIG_FOR_SUB_ID, [CallArg::I32(sub)]) if !self.modern() => {
                Ok(CallReply::Bundle(self.resolved(*sub)))
            }
            (METHOD_DEFAULT_CARRIER_PACKAGE, []) if self.modern() => {
                Ok(CallReply::Str(self.carrier_package.lock().unwrap().clone()))
            }
            _ => Err(CallError::MethodNotFound {
                method: method.to_string(),
            }),
        }
    }

    fn invoke_telephony(&self, method: &str, args: &[CallArg]) -> Result<CallReply, CallError> {
        match (method, args) {
            (METHOD_IS_IMS_REGISTERED, [CallArg::I32(sub)]) => Ok(CallReply::Bool(
                self.ims_registered.lock().unwrap().contains(sub),
            )),
            (METHOD_RESET_IMS, [CallArg::I32(slot)]) => {
                self.ims_resets.lock().unwrap().push(*slot);
                // A reset drops registrations for every subscription in the
                // slot until the stack comes back.
                let in_slot: Vec<i32> = self
                    .subscriptions
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|info| info.slot.0 == *slot)
                    .map(|info| info.id.0)
                    .collect();
                let mut registered = self.ims_registered.lock().unwrap();
                for sub in in_slot {
                    registered.remove(&sub);
                }
                Ok(CallReply::None)
            }
            (METHOD_CARRIER_NAME, [CallArg::I32(sub)]) => Ok(CallReply::Str(
                self.carrier_names.lock().unwrap().get(sub).cloned(),
            )),
            _ => Err(CallError::MethodNotFound {
                method: method.to_string(),
            }),
        }
    }

    fn invoke_subscriber_info(
        &self,
        method: &str,
        args: &[CallArg],
    ) -> Result<CallReply, CallError> {
        match (method, args) {
            (METHOD_SUBSCRIBER_ID, [CallArg::I32(sub)]) => Ok(CallReply::Str(
                self.subscriber_ids.lock().unwrap().get(sub).cloned(),
            )),
            _ => Err(CallError::MethodNotFound {
                method: method.to_string(),
            }),
        }
    }

    fn invoke_registry(&self, method: &str, args: &[CallArg]) -> Result<CallReply, CallError> {
        match (method, args) {
            (METHOD_ACTIVE_SUBSCRIPTIONS, [CallArg::Str(_), CallArg::Str(_)]) => {
                if *self.two_arg_listing.lock().unwrap() {
                    Ok(CallReply::Subscriptions(
                        self.subscriptions.lock().unwrap().clone(),
                    ))
                } else {
                    Err(CallError::MethodNotFound {
                        method: method.to_string(),
                    })
                }
            }
            (METHOD_ACTIVE_SUBSCRIPTIONS, [CallArg::Str(_)]) => Ok(CallReply::Subscriptions(
                self.subscriptions.lock().unwrap().clone(),
            )),
            (METHOD_SUBSCRIPTION_FOR_SLOT, [CallArg::I32(slot)]) => {
                let found = self
                    .subscriptions
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|info| info.slot.0 == *slot)
                    .cloned();
                match found {
                    Some(info) => Ok(CallReply::Subscriptions(vec![info])),
                    None => Ok(CallReply::None),
                }
            }
            (METHOD_DEFAULT_SUB_ID, []) => {
                Ok(CallReply::I32(*self.default_sub.lock().unwrap()))
            }
            (METHOD_SLOT_INDEX, [CallArg::I32(sub)]) => Ok(CallReply::I32(self.slot_of(*sub))),
            _ => Err(CallError::MethodNotFound {
                method: method.to_string(),
            }),
        }
    }
}

struct FakeEndpoint {
    service: &'static str,
    state: Arc<DeviceState>,
}

impl ServiceEndpoint for FakeEndpoint {
    fn service(&self) -> &str {
        self.service
    }

    fn invoke(&self, method: &str, args: &[CallArg]) -> Result<CallReply, CallError> {
        self.state.record(self.service, method, args);
        self.state.gate(method)?;
        match self.service {
            SERVICE_CONFIG_OVERRIDE => self.state.invoke_config_override(method, args),
            SERVICE_TELEPHONY => self.state.invoke_telephony(method, args),
            SERVICE_SUBSCRIBER_INFO => self.state.invoke_subscriber_info(method, args),
            SERVICE_SUBSCRIPTION_REGISTRY => self.state.invoke_registry(method, args),
            other => Err(CallError::Transport {
                reason: format!("fake platform has no service {other}"),
            }),
        }
    }
}

/// Broker half of the fake. Hand it to [`CarrierClient::new`].
pub struct FakeBroker {
    state: Arc<DeviceState>,
}

impl CapabilityProvider for FakeBroker {
    fn open(&self, service: &str) -> Result<Box<dyn ServiceEndpoint>, ProviderError> {
        *self
            .state
            .opens
            .lock()
            .unwrap()
            .entry(service.to_string())
            .or_insert(0) += 1;
        let known = match service {
            SERVICE_CONFIG_OVERRIDE => SERVICE_CONFIG_OVERRIDE,
            SERVICE_TELEPHONY => SERVICE_TELEPHONY,
            SERVICE_SUBSCRIBER_INFO => SERVICE_SUBSCRIBER_INFO,
            SERVICE_SUBSCRIPTION_REGISTRY => SERVICE_SUBSCRIPTION_REGISTRY,
            other => return Err(ProviderError::UnknownService(other.to_string())),
        };
        Ok(Box::new(FakeEndpoint {
            service: known,
            state: self.state.clone(),
        }))
    }
}

/// Builder and assertion surface for the fake device.
pub struct FakePlatform {
    state: Arc<DeviceState>,
}

impl FakePlatform {
    /// Fake device running at the given platform level with one default
    /// subscription (id 1, slot 0).
    pub fn new(api_level: u32) -> Self {
        let state = DeviceState {
            api_level,
            two_arg_listing: Mutex::new(api_level >= 30),
            default_sub: Mutex::new(1),
            carrier_package: Mutex::new(Some("com.device.carrierconfig".to_string())),
            ..DeviceState::default()
        };
        state
            .subscriptions
            .lock()
            .unwrap()
            .push(SubscriptionInfo::new(1, 0));
        FakePlatform {
            state: Arc::new(state),
        }
    }

    // ---- builders -------------------------------------------------------

    /// Replace the subscription table.
    pub fn with_subscriptions(self, subs: Vec<SubscriptionInfo>) -> Self {
        *self.state.subscriptions.lock().unwrap() = subs;
        self
    }

    pub fn with_default_subscription(self, sub: i32) -> Self {
        *self.state.default_sub.lock().unwrap() = sub;
        self
    }

    /// Seed a platform-default configuration value for a subscription.
    pub fn with_platform_default(
        self,
        sub: i32,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Self {
        self.state
            .defaults
            .lock()
            .unwrap()
            .entry(sub)
            .or_default()
            .set(key, value);
        self
    }

    pub fn with_carrier_name(self, sub: i32, name: impl Into<String>) -> Self {
        self.state
            .carrier_names
            .lock()
            .unwrap()
            .insert(sub, name.into());
        self
    }

    pub fn with_subscriber_id(self, sub: i32, imsi: impl Into<String>) -> Self {
        self.state
            .subscriber_ids
            .lock()
            .unwrap()
            .insert(sub, imsi.into());
        self
    }

    pub fn with_ims_registered(self, sub: i32) -> Self {
        self.state.ims_registered.lock().unwrap().insert(sub);
        self
    }

    pub fn with_carrier_package(self, package: impl Into<String>) -> Self {
        *self.state.carrier_package.lock().unwrap() = Some(package.into());
        self
    }

    /// Make every invocation of `method` fail as not found, regardless of
    /// argument shape.
    pub fn without_method(self, method: &str) -> Self {
        self.state
            .missing_methods
            .lock()
            .unwrap()
            .insert(method.to_string());
        self
    }

    /// Make every invocation of `method` fail as rejected.
    pub fn rejecting_method(self, method: &str) -> Self {
        self.state
            .rejected_methods
            .lock()
            .unwrap()
            .insert(method.to_string());
        self
    }

    /// Drop the two-argument listing shape, keeping the single-argument one.
    pub fn without_two_arg_listing(self) -> Self {
        *self.state.two_arg_listing.lock().unwrap() = false;
        self
    }

    // ---- client construction --------------------------------------------

    /// Broker handle for this device.
    pub fn broker(&self) -> FakeBroker {
        FakeBroker {
            state: self.state.clone(),
        }
    }

    /// Client whose probe reports the device's own level.
    pub fn client(&self) -> CarrierClient {
        CarrierClient::new(self.broker(), StaticVersion::new(self.state.api_level))
    }

    /// Client probing a different level than the device runs, for
    /// mismatched-dispatch scenarios.
    pub fn client_probing(&self, level: u32) -> CarrierClient {
        CarrierClient::new(self.broker(), StaticVersion::new(level))
    }

    // ---- assertions ------------------------------------------------------

    /// Times the broker opened `service`.
    pub fn open_count(&self, service: &str) -> usize {
        self.state
            .opens
            .lock()
            .unwrap()
            .get(service)
            .copied()
            .unwrap_or(0)
    }

    /// Every recorded invocation, in order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Recorded invocations of one method, in order.
    pub fn calls_of(&self, method: &str) -> Vec<CallRecord> {
        self.calls()
            .into_iter()
            .filter(|record| record.method == method)
            .collect()
    }

    /// Current override bundle for a subscription, if any is published.
    pub fn override_bundle(&self, sub: i32) -> Option<ConfigBundle> {
        self.state.overrides.lock().unwrap().get(&sub).cloned()
    }

    /// Slots that received an IMS reset, in order.
    pub fn ims_resets(&self) -> Vec<i32> {
        self.state.ims_resets.lock().unwrap().clone()
    }

    /// Whether the fake currently holds an IMS registration for `sub`.
    pub fn ims_registered(&self, sub: i32) -> bool {
        self.state.ims_registered.lock().unwrap().contains(&sub)
    }
}
