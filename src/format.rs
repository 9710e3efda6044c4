//! Fixed-width time formatting for the display surface

use std::time::Duration;

/// Format a duration as `MM:SS.mmm`, zero-padded, truncated (not rounded)
/// to the millisecond.
///
/// Minutes are unbounded; there is no hour field, so one hour renders as
/// `60:00.000`.
pub fn format_clock(d: Duration) -> String {
    let total_ms = d.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
}

/// Format the remaining countdown seconds as bare digits.
pub fn format_countdown(remaining_secs: u32) -> String {
    remaining_secs.to_string()
}
