//! End-to-end tests of the widget state machine, driven through the same
//! guarded event methods the event loop calls, with time under test
//! control.

use std::sync::Arc;
use std::time::Duration;

use stopclock::clock::{Clock, ManualClock};
use stopclock::render::Frame;
use stopclock::state::{TickOutcome, Variant, WidgetState};

fn widget(variant: Variant) -> (Arc<ManualClock>, WidgetState) {
    let clock = Arc::new(ManualClock::new());
    let widget = WidgetState::new(Arc::clone(&clock) as Arc<dyn Clock>, variant, 3);
    (clock, widget)
}

#[test]
fn elapsed_sums_all_running_intervals() {
    let (clock, mut w) = widget(Variant::Simple);

    // Three start/stop pairs with pauses in between.
    for (run_ms, pause_ms) in [(120, 500), (80, 1_000), (300, 50)] {
        w.primary_toggle(); // start
        clock.advance_ms(run_ms);
        w.primary_toggle(); // stop
        clock.advance_ms(pause_ms);
    }
    assert_eq!(w.elapsed(), Duration::from_millis(500));
}

#[test]
fn shortcut_acts_as_stop_while_running() {
    let (clock, mut w) = widget(Variant::Simple);

    w.primary_toggle(); // start
    clock.advance_ms(200);
    w.countdown_shortcut(); // running: acts as stop, must not arm
    assert!(!w.countdown_active());
    assert!(!w.is_running());
    w.primary_toggle(); // resume
    w.primary_toggle(); // stop again, zero-length segment
    assert_eq!(w.elapsed(), Duration::from_millis(200));
}

#[test]
fn reset_clears_everything_from_any_state() {
    let (clock, mut w) = widget(Variant::Extended);

    // While running, with laps recorded.
    w.primary_toggle();
    clock.advance_ms(400);
    w.lap();
    w.reset();
    assert!(!w.is_running());
    assert_eq!(w.elapsed(), Duration::ZERO);
    assert_eq!(w.lap_count(), 0);

    // While the countdown is armed.
    w.countdown_shortcut();
    assert!(w.countdown_active());
    let armed = w.countdown_generation();
    w.reset();
    assert!(!w.countdown_active());
    assert_eq!(w.elapsed(), Duration::ZERO);

    // A tick scheduled before the reset must not start the engine.
    assert_eq!(w.countdown_tick(armed), TickOutcome::Ignored);
    assert!(!w.is_running());
}

#[test]
fn countdown_completion_starts_engine_from_zero() {
    let (clock, mut w) = widget(Variant::Simple);

    w.countdown_shortcut();
    assert!(w.countdown_active());
    let generation = w.countdown_generation();

    clock.advance_ms(10_000); // wall time during the countdown is irrelevant
    assert_eq!(w.countdown_tick(generation), TickOutcome::Continue(2));
    assert_eq!(w.countdown_tick(generation), TickOutcome::Continue(1));
    assert_eq!(w.countdown_tick(generation), TickOutcome::Complete);

    assert!(w.is_running());
    assert_eq!(w.elapsed(), Duration::ZERO);

    clock.advance_ms(750);
    assert_eq!(w.elapsed(), Duration::from_millis(750));
}

#[test]
fn countdown_cancel_leaves_engine_idle() {
    let (_clock, mut w) = widget(Variant::Simple);

    w.countdown_shortcut();
    let generation = w.countdown_generation();
    assert_eq!(w.countdown_tick(generation), TickOutcome::Continue(2));

    w.countdown_shortcut(); // second press cancels
    assert!(!w.countdown_active());
    assert!(!w.is_running());
    assert_eq!(w.countdown_tick(generation), TickOutcome::Ignored);
}

#[test]
fn countdown_resumes_paused_accumulator() {
    let (clock, mut w) = widget(Variant::Simple);

    w.primary_toggle();
    clock.advance_ms(1_000);
    w.primary_toggle(); // paused at 1s

    w.countdown_shortcut();
    let generation = w.countdown_generation();
    for _ in 0..2 {
        w.countdown_tick(generation);
    }
    assert_eq!(w.countdown_tick(generation), TickOutcome::Complete);

    assert!(w.is_running());
    assert_eq!(w.elapsed(), Duration::from_millis(1_000));
}

#[test]
fn primary_during_countdown_cancels_instead_of_starting() {
    let (_clock, mut w) = widget(Variant::Simple);

    w.countdown_shortcut();
    assert!(w.countdown_active());

    w.primary_toggle();
    assert!(!w.countdown_active());
    assert!(!w.is_running());
}

#[test]
fn lap_ordering_and_gating() {
    let (clock, mut w) = widget(Variant::Extended);

    w.lap(); // idle: ignored
    assert_eq!(w.lap_count(), 0);

    w.primary_toggle();
    clock.advance_ms(100);
    w.lap();
    clock.advance_ms(150);
    w.lap();
    clock.advance_ms(150);
    w.lap();

    let entries = w.lap_entries();
    assert_eq!(
        entries,
        vec![
            (3, Duration::from_millis(400)),
            (2, Duration::from_millis(250)),
            (1, Duration::from_millis(100)),
        ]
    );

    w.primary_toggle(); // pause
    w.lap(); // paused: ignored per the conservative interpretation
    assert_eq!(w.lap_count(), 3);
}

#[test]
fn lap_is_ignored_in_simple_variant() {
    let (clock, mut w) = widget(Variant::Simple);
    w.primary_toggle();
    clock.advance_ms(100);
    w.lap();
    assert_eq!(w.lap_count(), 0);
}

#[test]
fn frames_track_state_through_a_full_session() {
    let (clock, mut w) = widget(Variant::Extended);

    let f = Frame::snapshot(&w);
    assert_eq!((f.display.as_str(), f.primary_label), ("00:00.000", "Start"));
    assert!(!f.reset_enabled);

    w.countdown_shortcut();
    let f = Frame::snapshot(&w);
    assert_eq!((f.display.as_str(), f.primary_label), ("3", "Cancel"));
    assert!(f.countdown_mode);

    let generation = w.countdown_generation();
    w.countdown_tick(generation);
    let f = Frame::snapshot(&w);
    assert_eq!(f.display, "2");

    w.countdown_tick(generation);
    w.countdown_tick(generation); // completes, engine starts
    clock.advance_ms(61_234);
    let f = Frame::snapshot(&w);
    assert_eq!((f.display.as_str(), f.primary_label), ("01:01.234", "Stop"));
    assert!(f.lap_enabled && f.reset_enabled && !f.countdown_mode);

    w.primary_toggle(); // stop
    let f = Frame::snapshot(&w);
    assert_eq!((f.display.as_str(), f.primary_label), ("01:01.234", "Start"));
    assert!(!f.lap_enabled && f.reset_enabled);

    w.reset();
    let f = Frame::snapshot(&w);
    assert_eq!((f.display.as_str(), f.primary_label), ("00:00.000", "Start"));
    assert!(!f.reset_enabled);
}
