//! Scroll commands and view fractions shared by the viewport and scrollbars.

/// Unit of a relative scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollUnit {
    /// One scroll increment.
    Units,
    /// Nine tenths of the visible extent.
    Pages,
}

/// A request to move a view, either to an absolute fraction of the scroll
/// region or by a number of units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    MoveTo(f64),
    Scroll(i32, ScrollUnit),
}

impl ScrollCommand {
    /// A zero-length relative scroll, used to trigger realignment.
    pub const NUDGE: ScrollCommand = ScrollCommand::Scroll(0, ScrollUnit::Units);

    pub const fn units(count: i32) -> Self {
        Self::Scroll(count, ScrollUnit::Units)
    }

    pub const fn pages(count: i32) -> Self {
        Self::Scroll(count, ScrollUnit::Pages)
    }
}

/// Visible portion of the scroll region along one axis, as fractions in
/// `[0.0, 1.0]` of the region's length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub first: f64,
    pub last: f64,
}

impl View {
    /// The whole region is visible.
    pub const FULLY_VISIBLE: View = View {
        first: 0.0,
        last: 1.0,
    };

    pub fn new(first: f64, last: f64) -> Self {
        Self {
            first: first.clamp(0.0, 1.0),
            last: last.clamp(0.0, 1.0),
        }
    }

    pub fn is_fully_visible(&self) -> bool {
        *self == Self::FULLY_VISIBLE
    }
}

impl Default for View {
    fn default() -> Self {
        Self::FULLY_VISIBLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}
