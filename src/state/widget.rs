//! Widget orchestration state
//!
//! Ties the engine, countdown, and lap log together behind the guarded
//! event-handling methods the event loop calls. All interleaving safety
//! lives here and in the component state machines: every method checks the
//! current state before mutating, so events arriving in any order (clicks,
//! frame callbacks, countdown ticks) cannot break the invariants.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::clock::Clock;

use super::controls::{derive_controls, Controls, Variant};
use super::countdown::{Countdown, TickOutcome};
use super::engine::TimerEngine;
use super::lap_log::LapLog;

pub struct WidgetState {
    engine: TimerEngine,
    countdown: Countdown,
    laps: LapLog,
    variant: Variant,
    countdown_secs: u32,
}

impl WidgetState {
    pub fn new(clock: Arc<dyn Clock>, variant: Variant, countdown_secs: u32) -> Self {
        Self {
            engine: TimerEngine::new(clock),
            countdown: Countdown::new(),
            laps: LapLog::new(),
            variant,
            countdown_secs,
        }
    }

    /// Primary control: cancel an armed countdown, stop while running,
    /// otherwise start immediately.
    ///
    /// The countdown check comes first; while the countdown is armed the
    /// engine cannot be started through this path, which is what keeps the
    /// countdown and a running engine mutually exclusive.
    pub fn primary_toggle(&mut self) {
        if self.countdown.cancel() {
            info!("countdown cancelled by primary control");
            return;
        }
        if self.engine.is_running() {
            self.engine.stop();
            info!("stopped at {:?}", self.engine.elapsed());
        } else {
            self.engine.start();
            info!("started");
        }
    }

    /// Countdown shortcut: cancel while armed, stop while running,
    /// otherwise arm the configured countdown.
    pub fn countdown_shortcut(&mut self) {
        if self.countdown.cancel() {
            info!("countdown cancelled");
            return;
        }
        if self.engine.is_running() {
            self.engine.stop();
            info!("stopped at {:?}", self.engine.elapsed());
            return;
        }
        if self.countdown.begin(self.countdown_secs) {
            info!("countdown armed for {}s", self.countdown_secs);
        }
    }

    /// Record a lap snapshot. Ignored in the simple variant and whenever
    /// the engine is not actively running.
    pub fn lap(&mut self) {
        if self.variant != Variant::Extended {
            debug!("lap ignored: simple variant");
            return;
        }
        if !self.engine.is_running() {
            debug!("lap ignored: engine not running");
            return;
        }
        let snapshot = self.engine.elapsed();
        self.laps.record(snapshot);
        info!("lap {} recorded at {:?}", self.laps.len(), snapshot);
    }

    /// Full reset: cancels any armed countdown, clears the engine and the
    /// lap log. Valid in every state.
    pub fn reset(&mut self) {
        if self.countdown.cancel() {
            info!("countdown cancelled by reset");
        }
        self.engine.reset();
        self.laps.clear();
        info!("reset");
    }

    /// Deliver a countdown tick scheduled under `generation`. On natural
    /// completion the engine starts exactly once, continuing from whatever
    /// the accumulator held when the countdown was armed.
    pub fn countdown_tick(&mut self, generation: u64) -> TickOutcome {
        let outcome = self.countdown.tick(generation);
        if outcome == TickOutcome::Complete {
            self.engine.start();
            info!("countdown complete, engine started");
        }
        outcome
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn countdown_generation(&self) -> u64 {
        self.countdown.generation()
    }

    pub fn countdown_remaining(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    pub fn elapsed(&self) -> Duration {
        self.engine.elapsed()
    }

    pub fn controls(&self) -> Controls {
        derive_controls(
            self.engine.phase(),
            self.countdown.is_active(),
            self.engine.has_accumulated(),
            self.variant,
        )
    }

    pub fn lap_entries(&self) -> Vec<(usize, Duration)> {
        self.laps.entries().collect()
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }
}
