//! Monotonic time sources
//!
//! All timing in the widget goes through the [`Clock`] trait so that the
//! state machines never touch wall-clock time (which can jump under NTP
//! adjustments) and so tests can drive time explicitly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonically non-decreasing time source.
///
/// `now()` reports the time since an arbitrary per-clock epoch. Readings are
/// only ever compared and subtracted within one clock instance.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Production clock anchored on [`Instant`] at construction.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that only advances when told to.
///
/// Shared via `Arc` between a test and the widget under test; advancing it
/// moves time forward for every reader.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta`, truncated to whole milliseconds.
    pub fn advance(&self, delta: Duration) {
        self.now_ms
            .fetch_add(delta.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn advance_ms(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms.load(Ordering::SeqCst))
    }
}
