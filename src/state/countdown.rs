//! Pre-start countdown state machine

use tracing::debug;

/// Default countdown length in seconds.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 3;

/// What a delivered tick amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was stale (countdown no longer armed, or armed again since
    /// the tick was scheduled) and mutated nothing.
    Ignored,
    /// The countdown is still running with this many seconds left.
    Continue(u32),
    /// The countdown just reached zero. Reported exactly once per arming.
    Complete,
}

/// One-shot countdown that ticks down once per second.
///
/// The scheduling itself lives in the event loop; this is only the decision
/// logic. Each arming gets a fresh generation number, and a tick must quote
/// the generation it was scheduled under. Cancelling (or completing) bumps
/// the generation, so a tick that was already in flight when the countdown
/// was cancelled is inert even if the scheduler still delivers it.
pub struct Countdown {
    active: bool,
    remaining: u32,
    generation: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            active: false,
            remaining: 0,
            generation: 0,
        }
    }

    /// Arm the countdown. Returns `false` (and changes nothing) if already
    /// armed or `seconds` is zero.
    pub fn begin(&mut self, seconds: u32) -> bool {
        if self.active {
            debug!("countdown begin ignored: already active");
            return false;
        }
        if seconds == 0 {
            debug!("countdown begin ignored: zero duration");
            return false;
        }
        self.active = true;
        self.remaining = seconds;
        self.generation += 1;
        debug!("countdown armed for {}s", seconds);
        true
    }

    /// Deliver one tick scheduled under `generation`.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.active || generation != self.generation {
            debug!("countdown tick ignored: stale or inactive");
            return TickOutcome::Ignored;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            TickOutcome::Continue(self.remaining)
        } else {
            // Completion is terminal for this arming; it bumps the
            // generation just like cancel, so the two are mutually
            // exclusive.
            self.disarm();
            debug!("countdown complete");
            TickOutcome::Complete
        }
    }

    /// Disarm without completing. Idempotent.
    pub fn cancel(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.disarm();
        debug!("countdown cancelled");
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left, while armed.
    pub fn remaining(&self) -> Option<u32> {
        self.active.then_some(self.remaining)
    }

    /// Generation of the current arming; ticks must quote this back.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn disarm(&mut self) {
        self.active = false;
        self.remaining = 0;
        self.generation += 1;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
