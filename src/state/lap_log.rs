//! Lap snapshot log (extended variant)

use std::time::Duration;
use tracing::debug;

const MAX_LAPS: usize = 99;

/// Append-only record of elapsed-time snapshots, newest first.
///
/// Entries are numbered for display by counting down from the total, so the
/// most recent lap always carries the highest rank. The log is only ever
/// emptied wholesale by a reset.
#[derive(Debug, Default)]
pub struct LapLog {
    laps: Vec<Duration>,
}

impl LapLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: Duration) {
        if self.laps.len() >= MAX_LAPS {
            debug!("lap ignored: log full ({} entries)", MAX_LAPS);
            return;
        }
        self.laps.insert(0, snapshot);
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    /// `(rank, snapshot)` pairs in display order (newest first).
    pub fn entries(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        let total = self.laps.len();
        self.laps
            .iter()
            .enumerate()
            .map(move |(i, d)| (total - i, *d))
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }
}
