//! Registry Types
//!
//! Core types for compliance officer records.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Sequential officer identifier (first officer is 1)
pub type OfficerId = u64;

/// Milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Expiry marker (block height or epoch value), stored but never enforced
pub type ExpiryDate = u64;

// ============================================================================
// PRINCIPAL
// ============================================================================

/// Opaque identity of an account that can act as, or be registered as, an officer.
///
/// No format validation is performed. Two principals are the same identity
/// exactly when their strings are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identity string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// OFFICER
// ============================================================================

/// A registered compliance officer.
///
/// `name`, `certification` and `expiry_date` are fixed at registration.
/// Only `verified` and `verification_date` change, and only through
/// verification by the registry owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    /// Sequential id assigned at registration
    pub id: OfficerId,
    /// Identity this record belongs to
    pub principal: Principal,
    /// Display name
    pub name: String,
    /// Credential label
    pub certification: String,
    /// Whether the owner has verified this officer
    pub verified: bool,
    /// Time of the most recent verification, 0 until verified
    pub verification_date: Timestamp,
    /// Expiry marker supplied at registration
    pub expiry_date: ExpiryDate,
}

impl Officer {
    /// Create a new unverified officer record
    pub fn new(
        id: OfficerId,
        principal: Principal,
        name: String,
        certification: String,
        expiry_date: ExpiryDate,
    ) -> Self {
        Self {
            id,
            principal,
            name,
            certification,
            verified: false,
            verification_date: 0,
            expiry_date,
        }
    }

    /// Current lifecycle state of this record
    pub fn status(&self) -> OfficerStatus {
        if self.verified {
            OfficerStatus::Verified {
                verified_at: self.verification_date,
            }
        } else {
            OfficerStatus::Unverified
        }
    }

    /// Mark verified at `now`, returning true if it was already verified
    pub(crate) fn mark_verified(&mut self, now: Timestamp) -> bool {
        let was_verified = self.verified;
        self.verified = true;
        self.verification_date = now;
        was_verified
    }
}

/// Lifecycle state of an officer record.
///
/// `Unverified` is the state at registration. `Verified` is terminal: no
/// operation returns a record to `Unverified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfficerStatus {
    Unverified,
    Verified { verified_at: Timestamp },
}

impl OfficerStatus {
    /// Returns human-readable name for the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficerStatus::Unverified => "unverified",
            OfficerStatus::Verified { .. } => "verified",
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, OfficerStatus::Verified { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_officer() -> Officer {
        Officer::new(
            1,
            Principal::new("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            "John Doe".to_string(),
            "Certified Compliance Professional".to_string(),
            1_000_000,
        )
    }

    #[test]
    fn test_new_officer_is_unverified() {
        let officer = sample_officer();
        assert!(!officer.verified);
        assert_eq!(officer.verification_date, 0);
        assert_eq!(officer.status(), OfficerStatus::Unverified);
    }

    #[test]
    fn test_mark_verified_reports_previous_state() {
        let mut officer = sample_officer();
        assert!(!officer.mark_verified(100));
        assert_eq!(officer.status(), OfficerStatus::Verified { verified_at: 100 });

        assert!(officer.mark_verified(250));
        assert_eq!(officer.verification_date, 250);
    }

    #[test]
    fn test_officer_json_field_names() {
        let officer = sample_officer();
        let value = serde_json::to_value(&officer).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        for key in [
            "id",
            "principal",
            "name",
            "certification",
            "verified",
            "verificationDate",
            "expiryDate",
        ] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert_eq!(value["principal"], "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
        assert_eq!(value["expiryDate"], 1_000_000);
    }

    #[test]
    fn test_principal_equality_is_string_equality() {
        assert_eq!(Principal::from("SP1"), Principal::new(String::from("SP1")));
        assert_ne!(Principal::from("SP1"), Principal::from("sp1"));
        assert!(Principal::default().is_empty());
        assert_eq!(Principal::from("SP1").to_string(), "SP1");
    }
}
