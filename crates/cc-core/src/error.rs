//! Error types for the configuration client.
//!
//! Two failure families reach callers: the capability broker refusing to
//! produce a handle for a role, and a remote call failing on a path that
//! surfaces failures (mutators and device-wide queries). Per-subscription
//! value reads never return these; they degrade to documented defaults and
//! log instead.

use crate::remote::{CallError, ProviderError};
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the configuration client.
#[derive(Debug, Error)]
pub enum Error {
    /// The capability broker could not open the named service.
    #[error("failed to resolve service {service}: {source}")]
    Resolve {
        service: &'static str,
        source: ProviderError,
    },

    /// A remote call failed.
    #[error(transparent)]
    Call(#[from] CallError),
}

impl Error {
    pub(crate) fn resolve(service: &'static str, source: ProviderError) -> Self {
        Error::Resolve { service, source }
    }

    /// Returns true if the failure happened while resolving a handle, as
    /// opposed to while calling through one. Resolution failures are worth
    /// retrying; the cache stays empty after one.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Error::Resolve { .. })
    }
}
