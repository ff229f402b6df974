//! Registry Event Log
//!
//! Emits events for:
//! - OfficerRegistered: a new officer record was created
//! - OfficerVerified: the owner verified (or re-verified) an officer
//!
//! Rejected writes never emit.

use serde::{Deserialize, Serialize};

use crate::types::{OfficerId, Principal, Timestamp};

/// Audit record of a successful registry write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    OfficerRegistered {
        officer_id: OfficerId,
        principal: Principal,
        registered_by: Principal,
    },
    OfficerVerified {
        officer_id: OfficerId,
        principal: Principal,
        verified_at: Timestamp,
        /// The officer was already verified; the date was re-stamped
        reverified: bool,
    },
}

impl RegistryEvent {
    /// Officer the event refers to
    pub fn officer_id(&self) -> OfficerId {
        match self {
            RegistryEvent::OfficerRegistered { officer_id, .. } => *officer_id,
            RegistryEvent::OfficerVerified { officer_id, .. } => *officer_id,
        }
    }

    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryEvent::OfficerRegistered { .. } => "officer_registered",
            RegistryEvent::OfficerVerified { .. } => "officer_verified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_matches_name() {
        let event = RegistryEvent::OfficerVerified {
            officer_id: 3,
            principal: Principal::from("SP1"),
            verified_at: 42,
            reverified: false,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], event.as_str());
        assert_eq!(event.officer_id(), 3);
    }
}
