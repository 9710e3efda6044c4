//! Event-loop lifecycle tests

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use stopclock::clock::{Clock, MonotonicClock};
use stopclock::input::InputEvent;
use stopclock::render::Renderer;
use stopclock::state::{Variant, WidgetState};
use stopclock::tasks::widget_loop;

fn widget() -> WidgetState {
    let clock: Arc<dyn Clock> = Arc::new(MonotonicClock::new());
    WidgetState::new(clock, Variant::Simple, 3)
}

#[tokio::test(flavor = "current_thread")]
async fn loop_exits_on_quit() {
    let (tx, rx) = mpsc::channel(4);
    tx.send(InputEvent::PrimaryToggle).await.unwrap();
    tx.send(InputEvent::PrimaryToggle).await.unwrap();
    tx.send(InputEvent::Quit).await.unwrap();

    let result = widget_loop(widget(), rx, Renderer::json(), Duration::from_millis(5)).await;
    assert!(result.is_ok());
}

#[tokio::test(flavor = "current_thread")]
async fn loop_exits_when_input_channel_closes() {
    let (tx, rx) = mpsc::channel(4);
    tx.send(InputEvent::Reset).await.unwrap();
    drop(tx);

    let result = widget_loop(widget(), rx, Renderer::json(), Duration::from_millis(5)).await;
    assert!(result.is_ok());
}
