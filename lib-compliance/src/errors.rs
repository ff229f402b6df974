//! Registry Errors

use thiserror::Error;

use crate::types::{OfficerId, Principal};

/// Error returned by a rejected registry write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Caller {caller} is not the registry owner")]
    NotOwner { caller: Principal },

    #[error("Principal {principal} is already registered as officer {officer_id}")]
    AlreadyRegistered {
        principal: Principal,
        officer_id: OfficerId,
    },

    #[error("Officer not found: {0}")]
    InvalidOfficer(OfficerId),
}

impl RegistryError {
    /// Stable error code for host environments
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::NotOwner { .. } => "err-owner-only",
            RegistryError::AlreadyRegistered { .. } => "err-already-verified",
            RegistryError::InvalidOfficer(_) => "err-invalid-officer",
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Broken registry invariant reported by `OfficerRegistry::validate`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Principal {principal} maps to missing officer {officer_id}")]
    DanglingPrincipal {
        principal: Principal,
        officer_id: OfficerId,
    },

    #[error("Officer {officer_id} belongs to {stored}, but is indexed under {indexed}")]
    PrincipalMismatch {
        officer_id: OfficerId,
        stored: Principal,
        indexed: Principal,
    },

    #[error("Officer stored under key {key} carries id {stored_id}")]
    IdMismatch { key: OfficerId, stored_id: OfficerId },

    #[error("Next officer id {next_id} does not exceed existing id {officer_id}")]
    StaleNextId {
        next_id: OfficerId,
        officer_id: OfficerId,
    },

    #[error("Officer {0} is verified without a verification date")]
    MissingVerificationDate(OfficerId),

    #[error("Index size mismatch: {officers} officers, {principals} principals")]
    IndexSizeMismatch { officers: usize, principals: usize },
}

/// Error during registry construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Registry owner identity cannot be empty")]
    EmptyOwner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let not_owner = RegistryError::NotOwner {
            caller: Principal::from("SP1234567890ABCDEF"),
        };
        let duplicate = RegistryError::AlreadyRegistered {
            principal: Principal::from("SP1"),
            officer_id: 1,
        };
        let missing = RegistryError::InvalidOfficer(999);

        assert_eq!(not_owner.code(), "err-owner-only");
        assert_eq!(duplicate.code(), "err-already-verified");
        assert_eq!(missing.code(), "err-invalid-officer");
    }

    #[test]
    fn test_error_display() {
        let missing = RegistryError::InvalidOfficer(999);
        assert_eq!(missing.to_string(), "Officer not found: 999");

        let not_owner = RegistryError::NotOwner {
            caller: Principal::from("SP1"),
        };
        assert_eq!(not_owner.to_string(), "Caller SP1 is not the registry owner");
    }
}
