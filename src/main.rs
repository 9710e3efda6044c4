//! Stopclock - a state-machine stopwatch widget for the terminal
//!
//! This is the main entry point for the stopclock binary.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use stopclock::{
    clock::{Clock, MonotonicClock},
    config::Config,
    input::read_input,
    render::Renderer,
    state::WidgetState,
    tasks::widget_loop,
    utils::shutdown_signal,
};

// Single-threaded by design: input events, frame ticks, and countdown ticks
// interleave but never overlap, so the state machines need no locks.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the display surface.
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopclock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting stopclock v1.0.0");
    info!(
        "Configuration: countdown={}s, fps={}, variant={:?}, json={}",
        config.countdown_secs,
        config.fps,
        config.variant(),
        config.json
    );
    info!("Commands: [enter]/s start-stop, c countdown, l lap, r reset, q quit");

    let clock: Arc<dyn Clock> = Arc::new(MonotonicClock::new());
    let widget = WidgetState::new(clock, config.variant(), config.countdown_secs);

    let (input_tx, input_rx) = mpsc::channel(16);
    tokio::spawn(read_input(input_tx));

    let renderer = if config.json {
        Renderer::json()
    } else {
        Renderer::terminal()
    };

    tokio::select! {
        result = widget_loop(widget, input_rx, renderer, config.frame_period()) => {
            result?;
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            if !config.json {
                println!();
            }
        }
    }

    info!("stopclock shutdown complete");
    Ok(())
}
