//! Officer Registry Contract
//!
//! Authoritative record of compliance officers and their verification status.
//!
//! # Invariants
//!
//! - **I1**: Every id in the principal index exists in the officer table
//! - **I2**: An officer's principal equals the principal indexing it
//! - **I3**: `next_officer_id` is greater than every assigned id
//! - **I4**: At most one officer per principal, forever (no de-registration)
//! - **I5**: A verified officer has a non-zero verification date
//!
//! Writes are owner-gated and all-or-nothing: every check runs before the
//! first mutation. Reads are public and hand out owned copies.

use std::collections::{BTreeMap, HashMap};

use crate::clock::{Clock, SystemClock};
use crate::config::RegistryConfig;
use crate::errors::{ConfigError, InvariantViolation, RegistryError, RegistryResult};
use crate::events::RegistryEvent;
use crate::types::{ExpiryDate, Officer, OfficerId, OfficerStatus, Principal};

/// First id handed out by a fresh registry
pub const FIRST_OFFICER_ID: OfficerId = 1;

/// Compliance officer registry state machine
#[derive(Debug)]
pub struct OfficerRegistry<C: Clock = SystemClock> {
    /// Administrator identity, fixed at construction
    owner: Principal,

    /// Primary storage: officer id -> officer
    officers: BTreeMap<OfficerId, Officer>,

    /// Lookup index: principal -> officer id (enforces one officer per principal)
    principal_to_id: HashMap<Principal, OfficerId>,

    /// Monotonic id counter, never reused
    next_officer_id: OfficerId,

    /// Audit log of successful writes, unbounded until drained
    events: Vec<RegistryEvent>,
    record_events: bool,

    clock: C,
}

impl OfficerRegistry<SystemClock> {
    /// Create an empty registry stamped by the wall clock
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> OfficerRegistry<C> {
    /// Create an empty registry with a custom time source
    pub fn with_clock(config: RegistryConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        tracing::debug!(owner = %config.owner, "officer registry created");

        Ok(Self {
            owner: config.owner,
            officers: BTreeMap::new(),
            principal_to_id: HashMap::new(),
            next_officer_id: FIRST_OFFICER_ID,
            events: Vec::new(),
            record_events: config.record_events,
            clock,
        })
    }

    // ===== Write Operations =====

    /// Register the caller as an officer
    ///
    /// # Errors
    ///
    /// - `NotOwner` if `caller` is not the registry owner
    /// - `AlreadyRegistered` if `caller` already has an officer record
    pub fn register(
        &mut self,
        name: impl Into<String>,
        certification: impl Into<String>,
        expiry_date: ExpiryDate,
        caller: &Principal,
    ) -> RegistryResult<OfficerId> {
        self.register_on_behalf(caller.clone(), name, certification, expiry_date, caller)
    }

    /// Register an officer record for `subject`, authorized by `caller`
    ///
    /// Same checks and effects as [`register`](Self::register), except the
    /// record belongs to `subject` rather than to the caller.
    ///
    /// # Errors
    ///
    /// - `NotOwner` if `caller` is not the registry owner
    /// - `AlreadyRegistered` if `subject` already has an officer record
    pub fn register_on_behalf(
        &mut self,
        subject: Principal,
        name: impl Into<String>,
        certification: impl Into<String>,
        expiry_date: ExpiryDate,
        caller: &Principal,
    ) -> RegistryResult<OfficerId> {
        // === VALIDATION PHASE (before any mutation) ===
        self.ensure_owner(caller)?;

        if let Some(&officer_id) = self.principal_to_id.get(&subject) {
            tracing::warn!(
                principal = %subject,
                officer_id,
                "registration rejected: principal already registered"
            );
            return Err(RegistryError::AlreadyRegistered {
                principal: subject,
                officer_id,
            });
        }

        // === MUTATION PHASE (all validations passed) ===
        let officer_id = self.next_officer_id;
        let officer = Officer::new(
            officer_id,
            subject.clone(),
            name.into(),
            certification.into(),
            expiry_date,
        );

        self.officers.insert(officer_id, officer);
        self.principal_to_id.insert(subject.clone(), officer_id);
        self.next_officer_id += 1;

        tracing::info!(officer_id, principal = %subject, "officer registered");

        self.emit(RegistryEvent::OfficerRegistered {
            officer_id,
            principal: subject,
            registered_by: caller.clone(),
        });

        Ok(officer_id)
    }

    /// Mark an officer as verified at the current clock time
    ///
    /// Verifying an already-verified officer is allowed and re-stamps the date.
    ///
    /// # Errors
    ///
    /// - `NotOwner` if `caller` is not the registry owner
    /// - `InvalidOfficer` if no officer has `officer_id`
    pub fn verify(&mut self, officer_id: OfficerId, caller: &Principal) -> RegistryResult<()> {
        self.ensure_owner(caller)?;

        // 0 means "never verified", whatever the clock says
        let now = self.clock.now().max(1);
        let officer = match self.officers.get_mut(&officer_id) {
            Some(officer) => officer,
            None => {
                tracing::warn!(officer_id, "verification rejected: unknown officer");
                return Err(RegistryError::InvalidOfficer(officer_id));
            }
        };

        let reverified = officer.mark_verified(now);
        let principal = officer.principal.clone();

        if reverified {
            tracing::debug!(officer_id, verified_at = now, "officer re-verified");
        } else {
            tracing::info!(
                officer_id,
                principal = %principal,
                verified_at = now,
                "officer verified"
            );
        }

        self.emit(RegistryEvent::OfficerVerified {
            officer_id,
            principal,
            verified_at: now,
            reverified,
        });

        Ok(())
    }

    // ===== Read Operations =====

    /// Check whether `principal` is a verified officer
    ///
    /// Unknown principals and registered-but-unverified principals both
    /// return false.
    pub fn is_verified(&self, principal: &Principal) -> bool {
        self.principal_to_id
            .get(principal)
            .and_then(|id| self.officers.get(id))
            .map(|officer| officer.verified)
            .unwrap_or(false)
    }

    /// Get a copy of an officer by id
    pub fn get_officer_by_id(&self, officer_id: OfficerId) -> Option<Officer> {
        self.officers.get(&officer_id).cloned()
    }

    /// Get a copy of the officer registered for `principal`
    pub fn get_officer_by_principal(&self, principal: &Principal) -> Option<Officer> {
        self.principal_to_id
            .get(principal)
            .and_then(|id| self.officers.get(id))
            .cloned()
    }

    /// Lifecycle state of an officer, if registered
    pub fn status_of(&self, officer_id: OfficerId) -> Option<OfficerStatus> {
        self.officers.get(&officer_id).map(Officer::status)
    }

    /// All officers ordered by id
    pub fn officers(&self) -> Vec<Officer> {
        self.officers.values().cloned().collect()
    }

    /// Registry administrator
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Check whether `principal` is the registry administrator
    pub fn is_owner(&self, principal: &Principal) -> bool {
        *principal == self.owner
    }

    /// Number of registered officers
    pub fn officer_count(&self) -> usize {
        self.officers.len()
    }

    /// Id the next successful registration will receive
    pub fn next_officer_id(&self) -> OfficerId {
        self.next_officer_id
    }

    // ===== Event Log =====

    /// Events recorded since construction or the last drain
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== Validation =====

    /// Check every registry invariant
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all invariants hold
    /// - `Err(...)` with the first violation found
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.officers.len() != self.principal_to_id.len() {
            return Err(InvariantViolation::IndexSizeMismatch {
                officers: self.officers.len(),
                principals: self.principal_to_id.len(),
            });
        }

        // I1, I2
        for (principal, &officer_id) in &self.principal_to_id {
            let officer = self.officers.get(&officer_id).ok_or_else(|| {
                InvariantViolation::DanglingPrincipal {
                    principal: principal.clone(),
                    officer_id,
                }
            })?;

            if officer.principal != *principal {
                return Err(InvariantViolation::PrincipalMismatch {
                    officer_id,
                    stored: officer.principal.clone(),
                    indexed: principal.clone(),
                });
            }
        }

        for (&key, officer) in &self.officers {
            if officer.id != key {
                return Err(InvariantViolation::IdMismatch {
                    key,
                    stored_id: officer.id,
                });
            }

            // I3
            if key >= self.next_officer_id {
                return Err(InvariantViolation::StaleNextId {
                    next_id: self.next_officer_id,
                    officer_id: key,
                });
            }

            // I5
            if officer.verified && officer.verification_date == 0 {
                return Err(InvariantViolation::MissingVerificationDate(key));
            }
        }

        Ok(())
    }

    // ===== Internal =====

    /// Authorization guard shared by every write
    fn ensure_owner(&self, caller: &Principal) -> RegistryResult<()> {
        if !self.is_owner(caller) {
            tracing::warn!(caller = %caller, "write rejected: caller is not the owner");
            return Err(RegistryError::NotOwner {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    fn emit(&mut self, event: RegistryEvent) {
        if self.record_events {
            self.events.push(event);
        }
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
