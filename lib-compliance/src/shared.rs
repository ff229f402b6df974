//! Shared Officer Registry
//!
//! Thread-safe handle for hosts that serve the registry from several threads.
//! Each write holds the write lock for its whole check-then-mutate sequence,
//! so concurrent writers are linearized. Reads take the read lock and return
//! owned copies.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::RegistryConfig;
use crate::errors::{ConfigError, InvariantViolation, RegistryResult};
use crate::events::RegistryEvent;
use crate::registry::OfficerRegistry;
use crate::types::{ExpiryDate, Officer, OfficerId, Principal};

/// Cloneable, thread-safe handle to one officer registry
#[derive(Debug)]
pub struct SharedOfficerRegistry<C: Clock = SystemClock> {
    inner: Arc<RwLock<OfficerRegistry<C>>>,
}

impl<C: Clock> Clone for SharedOfficerRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedOfficerRegistry<SystemClock> {
    /// Create a shared registry stamped by the wall clock
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_registry(OfficerRegistry::new(config)?))
    }
}

impl<C: Clock> SharedOfficerRegistry<C> {
    /// Create a shared registry with a custom time source
    pub fn with_clock(config: RegistryConfig, clock: C) -> Result<Self, ConfigError> {
        Ok(Self::from_registry(OfficerRegistry::with_clock(config, clock)?))
    }

    /// Wrap an existing registry
    pub fn from_registry(registry: OfficerRegistry<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    // ===== Write Operations =====

    pub fn register(
        &self,
        name: impl Into<String>,
        certification: impl Into<String>,
        expiry_date: ExpiryDate,
        caller: &Principal,
    ) -> RegistryResult<OfficerId> {
        self.inner
            .write()
            .register(name, certification, expiry_date, caller)
    }

    pub fn register_on_behalf(
        &self,
        subject: Principal,
        name: impl Into<String>,
        certification: impl Into<String>,
        expiry_date: ExpiryDate,
        caller: &Principal,
    ) -> RegistryResult<OfficerId> {
        self.inner
            .write()
            .register_on_behalf(subject, name, certification, expiry_date, caller)
    }

    pub fn verify(&self, officer_id: OfficerId, caller: &Principal) -> RegistryResult<()> {
        self.inner.write().verify(officer_id, caller)
    }

    pub fn drain_events(&self) -> Vec<RegistryEvent> {
        self.inner.write().drain_events()
    }

    // ===== Read Operations =====

    pub fn is_verified(&self, principal: &Principal) -> bool {
        self.inner.read().is_verified(principal)
    }

    pub fn get_officer_by_id(&self, officer_id: OfficerId) -> Option<Officer> {
        self.inner.read().get_officer_by_id(officer_id)
    }

    pub fn get_officer_by_principal(&self, principal: &Principal) -> Option<Officer> {
        self.inner.read().get_officer_by_principal(principal)
    }

    pub fn officers(&self) -> Vec<Officer> {
        self.inner.read().officers()
    }

    pub fn officer_count(&self) -> usize {
        self.inner.read().officer_count()
    }

    pub fn next_officer_id(&self) -> OfficerId {
        self.inner.read().next_officer_id()
    }

    pub fn owner(&self) -> Principal {
        self.inner.read().owner().clone()
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.inner.read().validate()
    }

    /// Run several reads against one consistent state
    pub fn with_read<R>(&self, f: impl FnOnce(&OfficerRegistry<C>) -> R) -> R {
        let registry = self.inner.read();
        f(&registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::errors::RegistryError;
    use std::thread;

    const OWNER: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";

    fn create_shared() -> SharedOfficerRegistry<ManualClock> {
        SharedOfficerRegistry::with_clock(RegistryConfig::new(OWNER), ManualClock::new(10)).unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let shared = create_shared();
        let handle = shared.clone();
        let owner = Principal::from(OWNER);

        let officer_id = handle.register("John Doe", "CCP", 1_000_000, &owner).unwrap();
        shared.verify(officer_id, &owner).unwrap();

        assert!(handle.is_verified(&owner));
        assert_eq!(shared.officer_count(), 1);
        assert_eq!(handle.owner(), owner);
    }

    #[test]
    fn test_concurrent_duplicate_registration_succeeds_once() {
        let shared = create_shared();
        let owner = Principal::from(OWNER);

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let registry = shared.clone();
                let owner = owner.clone();
                thread::spawn(move || registry.register(format!("Officer {}", n), "CCP", 1, &owner))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(RegistryError::AlreadyRegistered { .. })))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 15);
        assert_eq!(shared.next_officer_id(), 2);
        assert!(shared.validate().is_ok());
    }

    #[test]
    fn test_concurrent_distinct_registrations_get_distinct_ids() {
        let shared = create_shared();
        let owner = Principal::from(OWNER);

        let handles: Vec<_> = (0..32)
            .map(|n| {
                let registry = shared.clone();
                let owner = owner.clone();
                thread::spawn(move || {
                    let subject = Principal::new(format!("SP{:04}", n));
                    registry
                        .register_on_behalf(subject, "Officer", "Cert", n, &owner)
                        .unwrap()
                })
            })
            .collect();

        let mut ids: Vec<OfficerId> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
        assert_eq!(shared.next_officer_id(), 33);
        assert!(shared.validate().is_ok());
    }

    #[test]
    fn test_with_read_sees_consistent_snapshot() {
        let shared = create_shared();
        let owner = Principal::from(OWNER);
        shared.register("John Doe", "CCP", 1, &owner).unwrap();

        let (count, next) = shared.with_read(|r| (r.officer_count(), r.next_officer_id()));
        assert_eq!(next, count as OfficerId + 1);
    }
}
