//! Control-affordance derivation
//!
//! Button labels and enabled flags are never stored; they are derived here,
//! in one place, from the authoritative state machines. This keeps every
//! render site consistent with the state machine by construction.

use super::engine::Phase;

/// Which variant of the widget is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Start/stop/reset only.
    Simple,
    /// Adds lap recording and the lap display.
    Extended,
}

/// Label carried by the primary (toggle) control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryLabel {
    Start,
    Stop,
    Cancel,
}

impl PrimaryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryLabel::Start => "Start",
            PrimaryLabel::Stop => "Stop",
            PrimaryLabel::Cancel => "Cancel",
        }
    }
}

/// Snapshot of every control affordance for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub primary: PrimaryLabel,
    pub lap_enabled: bool,
    pub reset_enabled: bool,
    /// The display is showing countdown digits rather than elapsed time.
    pub countdown_mode: bool,
}

/// Derive the control state from `{phase, countdown, accumulated, variant}`.
///
/// Lap is enabled only while actively running; while the countdown is armed
/// every control except its own cancel is locked out.
pub fn derive_controls(
    phase: Phase,
    countdown_active: bool,
    has_accumulated: bool,
    variant: Variant,
) -> Controls {
    if countdown_active {
        return Controls {
            primary: PrimaryLabel::Cancel,
            lap_enabled: false,
            reset_enabled: false,
            countdown_mode: true,
        };
    }
    match phase {
        Phase::Running => Controls {
            primary: PrimaryLabel::Stop,
            lap_enabled: variant == Variant::Extended,
            reset_enabled: true,
            countdown_mode: false,
        },
        Phase::Idle | Phase::Paused => Controls {
            primary: PrimaryLabel::Start,
            lap_enabled: false,
            reset_enabled: has_accumulated,
            countdown_mode: false,
        },
    }
}
