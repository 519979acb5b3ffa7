use thiserror::Error;

/// Failure to parse a configuration value from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown platform '{0}' (expected unix, apple, windows or other)")]
    UnknownPlatform(String),
    #[error("unknown wheel scope '{0}' (expected viewport or global)")]
    UnknownWheelScope(String),
}
