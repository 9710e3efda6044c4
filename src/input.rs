//! Terminal input surface
//!
//! Maps line-oriented stdin commands onto widget input events and feeds
//! them to the event loop over a channel.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// Discrete user actions the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start/stop toggle, or cancel while the countdown is armed.
    PrimaryToggle,
    /// Begin the countdown when idle; cancel it when armed; stop when
    /// running.
    CountdownShortcut,
    /// Record a lap (extended variant).
    Lap,
    /// Full reset.
    Reset,
    /// Exit the widget.
    Quit,
}

/// Parse one input line into an event. Unrecognized input maps to `None`.
pub fn parse_command(line: &str) -> Option<InputEvent> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" => Some(InputEvent::PrimaryToggle),
        "c" | "space" => Some(InputEvent::CountdownShortcut),
        "l" => Some(InputEvent::Lap),
        "r" => Some(InputEvent::Reset),
        "q" | "quit" => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Read stdin lines until EOF or quit, forwarding parsed events.
pub async fn read_input(tx: mpsc::Sender<InputEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Some(event) => {
                    if tx.send(event).await.is_err() {
                        break; // event loop is gone
                    }
                    if event == InputEvent::Quit {
                        break;
                    }
                }
                None => debug!("ignoring unrecognized input: {:?}", line.trim()),
            },
            Ok(None) => {
                debug!("stdin closed");
                let _ = tx.send(InputEvent::Quit).await;
                break;
            }
            Err(e) => {
                debug!("stdin read error: {}", e);
                let _ = tx.send(InputEvent::Quit).await;
                break;
            }
        }
    }
}
