//! Subscription and slot identity types.
//!
//! Platform interfaces address a subscription by a small signed integer and
//! report the physical SIM slot holding it the same way. Negative values are
//! sentinels for "no such subscription/slot"; every remote accessor in the
//! client checks validity before touching the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription ID wrapper with validity checking.
///
/// The platform hands out non-negative IDs for active subscriptions and uses
/// negative values (typically `-1`) to mean "unknown". Reads against an
/// invalid ID short-circuit to their unavailable defaults without any remote
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub i32);

impl SubscriptionId {
    /// Sentinel for "no subscription".
    pub const INVALID: SubscriptionId = SubscriptionId(-1);

    /// Returns true if this ID can address a real subscription.
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SubscriptionId {
    fn from(id: i32) -> Self {
        SubscriptionId(id)
    }
}

/// Physical SIM slot index.
///
/// Zero-based; `-1` means the subscription is not currently mapped to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotIndex(pub i32);

impl SlotIndex {
    /// Sentinel for "no slot".
    pub const INVALID: SlotIndex = SlotIndex(-1);

    /// Returns true if this index refers to a physical slot.
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SlotIndex {
    fn from(idx: i32) -> Self {
        SlotIndex(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_id_validity() {
        assert!(SubscriptionId(0).is_valid());
        assert!(SubscriptionId(7).is_valid());
        assert!(!SubscriptionId(-1).is_valid());
        assert!(!SubscriptionId::INVALID.is_valid());
        assert!(!SubscriptionId(i32::MIN).is_valid());
    }

    #[test]
    fn test_slot_index_validity() {
        assert!(SlotIndex(0).is_valid());
        assert!(SlotIndex(1).is_valid());
        assert!(!SlotIndex::INVALID.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SubscriptionId(3)), "3");
        assert_eq!(format!("{}", SlotIndex::INVALID), "-1");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&SubscriptionId(2)).unwrap();
        assert_eq!(json, "2");
        let back: SubscriptionId = serde_json::from_str("2").unwrap();
        assert_eq!(back, SubscriptionId(2));
    }
}
