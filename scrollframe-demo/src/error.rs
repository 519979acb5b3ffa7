use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
