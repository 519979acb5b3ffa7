use clap::Parser;
use log::LevelFilter;
use scrollframe::{Platform, WheelScope};

/// Scrollable grid of labels.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of rows and columns of labels.
    #[arg(short, long, default_value_t = 10)]
    pub dim: u16,

    /// Which wheel events scroll the grid: "viewport" or "global".
    #[arg(long, default_value_t = WheelScope::Viewport)]
    pub wheel_scope: WheelScope,

    /// Wheel encoding to emulate: unix, apple, windows or other.
    /// Defaults to the host platform.
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Log verbosity written to the log file.
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}
