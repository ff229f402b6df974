//! Compliance Officer Registry
//!
//! Authoritative registry of compliance officers: principals that a single
//! administrator (the owner) registers and then verifies.
//!
//! # Key Rules
//!
//! 1. **Owner-gated writes**: only the owner may register or verify
//! 2. **One officer per principal**: enforced permanently, no de-registration
//! 3. **Sequential ids**: the first officer is 1, ids are never reused
//! 4. **One-way verification**: `Unverified -> Verified`, never back
//! 5. **Public reads**: lookups never fail, absence is `None`
//!
//! The expiry date is stored with each officer but never enforced.
//!
//! # Usage
//!
//! ```ignore
//! use lib_compliance::{OfficerRegistry, Principal, RegistryConfig};
//!
//! let owner = Principal::from("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
//! let mut registry = OfficerRegistry::new(RegistryConfig::new(owner.clone()))?;
//!
//! let id = registry.register("John Doe", "CCP", 1_000_000, &owner)?;
//! registry.verify(id, &owner)?;
//! assert!(registry.is_verified(&owner));
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod events;
pub mod registry;
pub mod shared;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RegistryConfig;
pub use errors::{ConfigError, InvariantViolation, RegistryError, RegistryResult};
pub use events::RegistryEvent;
pub use registry::{OfficerRegistry, FIRST_OFFICER_ID};
pub use shared::SharedOfficerRegistry;
pub use types::{ExpiryDate, Officer, OfficerId, OfficerStatus, Principal, Timestamp};
