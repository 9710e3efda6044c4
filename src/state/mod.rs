//! Timing state machines and their orchestration
//!
//! Everything in here is pure state plus an injected clock; the scheduling
//! (frame callbacks, countdown ticks) lives in `tasks`.

pub mod controls;
pub mod countdown;
pub mod engine;
pub mod lap_log;
pub mod widget;

pub use controls::{derive_controls, Controls, PrimaryLabel, Variant};
pub use countdown::{Countdown, TickOutcome, DEFAULT_COUNTDOWN_SECS};
pub use engine::{Phase, TimerEngine};
pub use lap_log::LapLog;
pub use widget::WidgetState;
