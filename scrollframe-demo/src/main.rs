mod app;
mod args;
mod error;
mod paths;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, WriteLogger};

use crate::args::Args;
use crate::error::DemoError;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), DemoError> {
    let log_path = paths::log_file();
    let log_file = File::create(&log_path).map_err(|source| DemoError::LogFile {
        path: log_path.clone(),
        source,
    })?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;

    log::info!(
        "starting {}x{} demo, wheel scope {}, platform {}",
        args.dim,
        args.dim,
        args.wheel_scope,
        args.platform()
    );

    app::run(&args)
}
