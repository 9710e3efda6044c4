//! Stopclock - a state-machine stopwatch widget for the terminal
//!
//! The core is a clock-injected timing state machine: an elapsed-time
//! accumulator, an optional pre-start countdown, and (in the extended
//! variant) a lap log. A single-threaded event loop wires it to a terminal
//! input/render surface.

pub mod clock;
pub mod config;
pub mod format;
pub mod input;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Config;
pub use render::{Frame, Renderer};
pub use state::WidgetState;
pub use tasks::widget_loop;
pub use utils::shutdown_signal;
