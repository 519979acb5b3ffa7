//! Container configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::platform::Platform;
use crate::types::Color;

/// Which wheel events the container reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelScope {
    /// Only wheel events over the viewport.
    #[default]
    Viewport,
    /// Every wheel event delivered to the container, wherever the pointer is.
    Global,
}

impl fmt::Display for WheelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport => f.write_str("viewport"),
            Self::Global => f.write_str("global"),
        }
    }
}

impl FromStr for WheelScope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viewport" => Ok(Self::Viewport),
            "global" | "all" => Ok(Self::Global),
            _ => Err(ParseError::UnknownWheelScope(s.to_string())),
        }
    }
}

/// Colors used to draw the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub trough: Color,
    pub thumb: Color,
    pub thumb_active: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let thumb = Color::oklch(0.55, 0.02, 250.0);
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            trough: Color::oklch(0.22, 0.01, 250.0),
            thumb,
            thumb_active: thumb.lighten(0.15),
        }
    }
}

/// Configuration for a [`ScrollableFrame`](crate::ScrollableFrame).
///
/// # Example
///
/// ```
/// use scrollframe::{Platform, ScrollConfig, WheelScope};
///
/// let config = ScrollConfig::default()
///     .with_y_increment(Some(2))
///     .with_wheel_scope(WheelScope::Global)
///     .with_platform(Platform::Windows);
/// assert_eq!(config.y_increment, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Cells per horizontal scroll unit.
    ///
    /// Default: a tenth of the viewport width
    pub x_increment: Option<u16>,

    /// Cells per vertical scroll unit.
    ///
    /// Default: a tenth of the viewport height
    pub y_increment: Option<u16>,

    /// Default: [`WheelScope::Viewport`]
    pub wheel_scope: WheelScope,

    /// Platform whose wheel encoding is expected.
    ///
    /// Default: the compile-time host
    pub platform: Platform,

    pub theme: Theme,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            x_increment: None,
            y_increment: None,
            wheel_scope: WheelScope::default(),
            platform: Platform::current(),
            theme: Theme::default(),
        }
    }
}

impl ScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_x_increment(mut self, increment: Option<u16>) -> Self {
        self.x_increment = increment;
        self
    }

    pub fn with_y_increment(mut self, increment: Option<u16>) -> Self {
        self.y_increment = increment;
        self
    }

    pub fn with_wheel_scope(mut self, scope: WheelScope) -> Self {
        self.wheel_scope = scope;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
