//! Time Source
//!
//! Verification stamps come from a `Clock` so hosts can supply chain time
//! and tests can pin it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Timestamp;

/// Source of verification timestamps
pub trait Clock {
    /// Current time in milliseconds. Must never return 0.
    fn now(&self) -> Timestamp;
}

/// Wall clock, milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as Timestamp)
            .unwrap_or(0);
        // 0 means "never verified"
        millis.max(1)
    }
}

/// Manually driven clock shared between clones
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at `start` (clamped to at least 1)
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(start.max(1))),
        }
    }

    /// Move the clock forward, saturating at `u64::MAX`
    pub fn advance(&self, millis: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(millis))
            });
    }

    /// Jump to an absolute time (clamped to at least 1)
    pub fn set(&self, now: Timestamp) {
        self.millis.store(now.max(1), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.millis.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_positive() {
        assert!(SystemClock.now() > 0);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();

        handle.advance(500);
        assert_eq!(clock.now(), 1_500);

        handle.set(u64::MAX - 1);
        handle.advance(10);
        assert_eq!(clock.now(), u64::MAX);

        handle.set(0);
        assert_eq!(clock.now(), 1);
    }
}
