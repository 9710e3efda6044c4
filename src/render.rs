//! Render surface
//!
//! A [`Frame`] is the complete output of one render: the formatted display
//! string, the control affordances, and the ordered lap entries. Renderers
//! only consume frames; they never reach back into the state machines.

use std::io::{self, Write};

use serde::Serialize;

use crate::format::{format_clock, format_countdown};
use crate::state::WidgetState;

/// One lap line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapEntry {
    pub rank: usize,
    pub time: String,
}

/// Snapshot of everything the output surface shows.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Formatted elapsed time, or bare countdown digits while
    /// `countdown_mode` is set.
    pub display: String,
    pub primary_label: &'static str,
    pub lap_enabled: bool,
    pub reset_enabled: bool,
    pub countdown_mode: bool,
    /// Newest first, ranks counting down.
    pub laps: Vec<LapEntry>,
}

impl Frame {
    pub fn snapshot(widget: &WidgetState) -> Self {
        let controls = widget.controls();
        let display = match widget.countdown_remaining() {
            Some(remaining) => format_countdown(remaining),
            None => format_clock(widget.elapsed()),
        };
        let laps = widget
            .lap_entries()
            .into_iter()
            .map(|(rank, d)| LapEntry {
                rank,
                time: format_clock(d),
            })
            .collect();
        Self {
            display,
            primary_label: controls.primary.as_str(),
            lap_enabled: controls.lap_enabled,
            reset_enabled: controls.reset_enabled,
            countdown_mode: controls.countdown_mode,
            laps,
        }
    }
}

/// In-place terminal renderer: one status line rewritten with `\r`, with
/// newly recorded laps printed on their own lines as they appear.
pub struct TerminalRenderer {
    laps_printed: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { laps_printed: 0 }
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if frame.laps.is_empty() {
            self.laps_printed = 0;
        }
        // New laps sit at the front of the frame in rank order.
        let new_laps = frame.laps.len().saturating_sub(self.laps_printed);
        for entry in frame.laps.iter().take(new_laps).rev() {
            write!(out, "\r{:<40}\r\n", format!("lap {:>2}  {}", entry.rank, entry.time))?;
        }
        self.laps_printed = frame.laps.len();
        write!(out, "\r{:<40}", status_line(frame))?;
        out.flush()
    }

    /// Leave the final status line in place and move to a fresh line.
    pub fn finish(&mut self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Machine-readable renderer: one JSON object per frame on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn render(&self, frame: &Frame) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let line = serde_json::to_string(frame)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Output sink selected by configuration.
pub enum Renderer {
    Terminal(TerminalRenderer),
    Json(JsonRenderer),
}

impl Renderer {
    pub fn terminal() -> Self {
        Renderer::Terminal(TerminalRenderer::new())
    }

    pub fn json() -> Self {
        Renderer::Json(JsonRenderer)
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        match self {
            Renderer::Terminal(t) => t.render(frame),
            Renderer::Json(j) => j.render(frame),
        }
    }

    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            Renderer::Terminal(t) => t.finish(),
            Renderer::Json(_) => Ok(()),
        }
    }
}

fn status_line(frame: &Frame) -> String {
    let mut line = if frame.countdown_mode {
        format!("{:>9}  [{}]", frame.display, frame.primary_label)
    } else {
        format!("{}  [{}]", frame.display, frame.primary_label)
    };
    if frame.lap_enabled {
        line.push_str("  [Lap]");
    }
    if frame.reset_enabled {
        line.push_str("  [Reset]");
    }
    line
}
