//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::state::{Variant, DEFAULT_COUNTDOWN_SECS};

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "stopclock")]
#[command(about = "A state-machine stopwatch widget for the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Seconds counted down before an auto-start
    #[arg(short, long, default_value_t = DEFAULT_COUNTDOWN_SECS)]
    pub countdown_secs: u32,

    /// Display refresh rate in frames per second
    #[arg(short, long, default_value = "60")]
    pub fps: u32,

    /// Enable lap recording (extended variant)
    #[arg(short, long)]
    pub laps: bool,

    /// Emit frames as JSON lines instead of drawing to the terminal
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Which widget variant the flags select
    pub fn variant(&self) -> Variant {
        if self.laps {
            Variant::Extended
        } else {
            Variant::Simple
        }
    }

    /// Period of the display-refresh loop
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
