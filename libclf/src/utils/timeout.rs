//! Timeout helpers used across the crate.
//!
//! Sense steps use fixed per-exchange timeouts; listen procedures run against
//! a wall-clock [`Deadline`] that every receive call is clamped to.

use std::time::{Duration, Instant};

/// Default timeout in milliseconds for the first exchange of a sense
/// procedure (the "is anybody there" poll).
pub const DEFAULT_SENSE_TIMEOUT_MS: u64 = 1000;

/// Default timeout in milliseconds for every later exchange of an activation
/// sequence, once a peer has answered.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Wall-clock bound for a listen procedure.
///
/// A timeout too large to be represented as an `Instant` (e.g.
/// `Duration::MAX`) yields a deadline that never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires: Option<Instant>,
}

impl Deadline {
    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            expires: Instant::now().checked_add(timeout),
        }
    }

    /// Time left before expiry, or `None` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        match self.expires {
            Some(expires) => expires
                .checked_duration_since(Instant::now())
                .filter(|d| !d.is_zero()),
            None => Some(Duration::MAX),
        }
    }
}
