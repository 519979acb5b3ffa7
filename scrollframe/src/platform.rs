//! Host platform detection.
//!
//! Mouse wheel input arrives in a different encoding on each desktop
//! platform; see [`crate::wheel`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// X11-style hosts reporting the wheel as buttons 4 and 5.
    Unix,
    /// macOS: signed wheel delta, one unit per notch.
    Apple,
    /// Windows: signed wheel delta, 120 per notch.
    Windows,
    /// Anything else. Wheel input is ignored.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Apple
        } else if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Unix
        } else {
            Self::Other
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Apple => "apple",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "linux" | "x11" => Ok(Self::Unix),
            "apple" | "macos" | "darwin" => Ok(Self::Apple),
            "windows" | "win32" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            _ => Err(ParseError::UnknownPlatform(s.to_string())),
        }
    }
}
