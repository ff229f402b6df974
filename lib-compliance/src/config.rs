//! Registry Configuration
//!
//! Construction-time settings. The owner is read once when the registry is
//! built and never changes afterwards.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::Principal;

/// Configuration for an officer registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Administrator allowed to register and verify officers
    pub owner: Principal,
    /// Record successful writes in the registry event log.
    ///
    /// The log is unbounded: every write, including each re-verification,
    /// appends an entry until the host calls `drain_events`. Disable it when
    /// nothing drains the log.
    #[serde(default = "default_record_events")]
    pub record_events: bool,
}

fn default_record_events() -> bool {
    true
}

impl RegistryConfig {
    /// Create a config for the given owner with default settings
    pub fn new(owner: impl Into<Principal>) -> Self {
        Self {
            owner: owner.into(),
            record_events: default_record_events(),
        }
    }

    /// Create a config with a fixed test owner
    pub fn for_testing() -> Self {
        Self::new("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")
    }

    /// Disable the event log
    pub fn without_events(mut self) -> Self {
        self.record_events = false;
        self
    }

    /// Check the config can back a registry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_empty() {
            return Err(ConfigError::EmptyOwner);
        }
        Ok(())
    }
}
