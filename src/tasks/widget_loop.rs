//! The widget event loop
//!
//! One `select!` loop multiplexes the three asynchronous sources that feed
//! the state machines: user input events, the per-frame refresh tick, and
//! the 1-second countdown tick. The runtime is single-threaded, so the
//! sources interleave but never overlap; each branch is guarded so it only
//! runs while its source is supposed to be live.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::input::InputEvent;
use crate::render::{Frame, Renderer};
use crate::state::{TickOutcome, WidgetState};

/// Run the widget until quit or the input channel closes.
pub async fn widget_loop(
    mut widget: WidgetState,
    mut input_rx: mpsc::Receiver<InputEvent>,
    mut renderer: Renderer,
    frame_period: Duration,
) -> Result<()> {
    let mut frame_tick = tokio::time::interval(frame_period);
    frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut countdown_tick = tokio::time::interval(Duration::from_secs(1));
    countdown_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // Generation the countdown interval is currently scheduled under; a
    // tick delivered after cancel quotes a stale generation and is inert.
    let mut armed_generation = widget.countdown_generation();

    renderer.render(&Frame::snapshot(&widget))?;

    loop {
        tokio::select! {
            maybe_event = input_rx.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if event == InputEvent::Quit {
                    info!("quit requested");
                    break;
                }

                let was_armed = widget.countdown_active();
                match event {
                    InputEvent::PrimaryToggle => widget.primary_toggle(),
                    InputEvent::CountdownShortcut => widget.countdown_shortcut(),
                    InputEvent::Lap => widget.lap(),
                    InputEvent::Reset => widget.reset(),
                    InputEvent::Quit => unreachable!("handled above"),
                }

                if widget.countdown_active() && !was_armed {
                    // Fresh arming: restart the interval so the first tick
                    // lands a full second from now, and bind ticks to this
                    // arming's generation.
                    countdown_tick.reset();
                    armed_generation = widget.countdown_generation();
                }

                // Every event gets an immediate render, so a stop or reset
                // is visible without waiting for a frame tick.
                renderer.render(&Frame::snapshot(&widget))?;
            }

            // Refresh loop: live only while the engine is running.
            _ = frame_tick.tick(), if widget.is_running() => {
                renderer.render(&Frame::snapshot(&widget))?;
            }

            // Countdown ticker: live only while armed.
            _ = countdown_tick.tick(), if widget.countdown_active() => {
                match widget.countdown_tick(armed_generation) {
                    TickOutcome::Ignored => {}
                    TickOutcome::Continue(_) | TickOutcome::Complete => {
                        renderer.render(&Frame::snapshot(&widget))?;
                    }
                }
            }
        }
    }

    renderer.finish()?;
    Ok(())
}
