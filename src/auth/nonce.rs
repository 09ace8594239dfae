//! Tonce generation for Kuna API authentication.
//!
//! Every signed request carries a `tonce`: the current time in milliseconds.
//! The server rejects tonces that are stale or already used by the access key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing tonces for signed requests.
///
/// Inject a custom provider to make signed requests reproducible in tests.
pub trait NonceProvider: Send + Sync {
    /// Generate the tonce for the next request.
    fn next_nonce(&self) -> u64;
}

/// A tonce provider backed by the system clock.
///
/// Returns milliseconds since the UNIX epoch. Two calls within the same
/// millisecond still get distinct values: the result is bumped past the last
/// value handed out.
pub struct ClockNonce {
    last_nonce: AtomicU64,
}

impl ClockNonce {
    /// Create a new clock-backed tonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for ClockNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::current_time_millis();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = now.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}

/// A tonce provider that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}
