//! Elapsed-time accumulator state machine

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::clock::Clock;

/// Phase of the stopwatch engine.
///
/// `Idle` and `Paused` both mean "not running"; they differ in whether a
/// reset has cleared the accumulator since the last run segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// Tracks elapsed time across start/stop cycles against an injected
/// monotonic clock.
///
/// `accumulated` holds the sum of all completed run segments; while running,
/// the open segment is measured from `segment_start` on demand. Every
/// mutating operation checks the current phase first, so calls that are
/// invalid for the current state are silent no-ops.
pub struct TimerEngine {
    clock: Arc<dyn Clock>,
    phase: Phase,
    segment_start: Duration,
    accumulated: Duration,
}

impl TimerEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            phase: Phase::Idle,
            segment_start: Duration::ZERO,
            accumulated: Duration::ZERO,
        }
    }

    /// Open a new run segment. No-op while already running, so repeated
    /// starts cannot double-count elapsed time.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            debug!("start ignored: engine already running");
            return;
        }
        self.segment_start = self.clock.now();
        self.phase = Phase::Running;
        debug!("engine started");
    }

    /// Close the open run segment, folding it into the accumulator.
    pub fn stop(&mut self) {
        if self.phase != Phase::Running {
            debug!("stop ignored: engine not running");
            return;
        }
        self.accumulated += self.open_segment();
        self.phase = Phase::Paused;
        debug!("engine stopped at {:?}", self.accumulated);
    }

    /// Clear the accumulator from any phase.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.segment_start = Duration::ZERO;
        self.phase = Phase::Idle;
        debug!("engine reset");
    }

    /// Total elapsed time: completed segments plus the open one, if any.
    pub fn elapsed(&self) -> Duration {
        match self.phase {
            Phase::Running => self.accumulated + self.open_segment(),
            _ => self.accumulated,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether any time has been banked by a completed segment.
    pub fn has_accumulated(&self) -> bool {
        self.accumulated > Duration::ZERO
    }

    fn open_segment(&self) -> Duration {
        let now = self.clock.now();
        match now.checked_sub(self.segment_start) {
            Some(delta) => delta,
            None => {
                // A monotonic clock cannot produce this; clamp rather than
                // let a negative duration reach the formatter.
                warn!(
                    "clock reading {:?} precedes segment start {:?}, clamping segment to zero",
                    now, self.segment_start
                );
                Duration::ZERO
            }
        }
    }
}
