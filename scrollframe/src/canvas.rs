//! The viewport primitive.
//!
//! A `Canvas` shows a window onto an unbounded plane of canvas coordinates.
//! Its origin is the canvas coordinate displayed at the top-left cell; the
//! scroll region bounds where the origin may go. Views along each axis are
//! reported as fractions of the scroll region.

use crate::layout::Rect;
use crate::scroll::{Orientation, ScrollCommand, ScrollUnit, View};

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    width: u16,
    height: u16,
    origin_x: i32,
    origin_y: i32,
    scroll_region: Option<Rect>,
    /// Embedded window item, anchored north-west.
    window: Option<Rect>,
    x_increment: Option<u16>,
    y_increment: Option<u16>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with fixed scroll increments. `None` (or zero) scrolls
    /// by a tenth of the visible extent per unit.
    pub fn with_increments(x_increment: Option<u16>, y_increment: Option<u16>) -> Self {
        Self {
            x_increment,
            y_increment,
            ..Self::default()
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Resize the visible area. Returns true if the size changed.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.reconfine();
        true
    }

    /// Canvas coordinate shown at the top-left cell of the viewport.
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    pub fn scroll_region(&self) -> Option<Rect> {
        self.scroll_region
    }

    pub fn set_scroll_region(&mut self, region: Option<Rect>) {
        self.scroll_region = region;
        self.reconfine();
    }

    /// Place the window item with its top-left corner at `(x, y)`.
    pub fn create_window(&mut self, x: u16, y: u16) {
        self.window = Some(Rect::new(x, y, 0, 0));
    }

    /// Follow the embedded widget's size. No-op without a window item.
    pub fn resize_window(&mut self, width: u16, height: u16) {
        if let Some(window) = self.window.as_mut() {
            window.width = width;
            window.height = height;
        }
    }

    pub fn window(&self) -> Option<Rect> {
        self.window
    }

    /// Bounding box of every item on the canvas.
    pub fn bbox_all(&self) -> Option<Rect> {
        bbox(self.window)
    }

    pub fn xview(&self) -> View {
        self.view(Orientation::Horizontal)
    }

    pub fn yview(&self) -> View {
        self.view(Orientation::Vertical)
    }

    pub fn xview_moveto(&mut self, fraction: f64) {
        self.moveto(Orientation::Horizontal, fraction);
    }

    pub fn yview_moveto(&mut self, fraction: f64) {
        self.moveto(Orientation::Vertical, fraction);
    }

    pub fn xview_scroll(&mut self, count: i32, unit: ScrollUnit) {
        self.scroll(Orientation::Horizontal, count, unit);
    }

    pub fn yview_scroll(&mut self, count: i32, unit: ScrollUnit) {
        self.scroll(Orientation::Vertical, count, unit);
    }

    pub fn xview_command(&mut self, command: ScrollCommand) {
        self.command(Orientation::Horizontal, command);
    }

    pub fn yview_command(&mut self, command: ScrollCommand) {
        self.command(Orientation::Vertical, command);
    }

    pub fn view(&self, axis: Orientation) -> View {
        let Some((start, len)) = self.span(axis) else {
            return View::FULLY_VISIBLE;
        };
        if len <= 0 {
            return View::FULLY_VISIBLE;
        }
        let origin = self.axis_origin(axis);
        let len = len as f64;
        View::new(
            (origin - start) as f64 / len,
            (origin + self.extent(axis) - start) as f64 / len,
        )
    }

    pub fn moveto(&mut self, axis: Orientation, fraction: f64) {
        let (start, len) = self.span(axis).unwrap_or((0, 0));
        let target = start as f64 + (fraction * len as f64).round();
        self.set_origin(axis, target as i32);
    }

    pub fn scroll(&mut self, axis: Orientation, count: i32, unit: ScrollUnit) {
        let extent = self.extent(axis);
        let step = match unit {
            ScrollUnit::Units => match self.increment(axis) {
                Some(increment) if increment > 0 => increment as i32,
                _ => (extent / 10).max(1),
            },
            ScrollUnit::Pages => (extent * 9 / 10).max(1),
        };
        let target = self.axis_origin(axis).saturating_add(count.saturating_mul(step));
        self.set_origin(axis, target);
    }

    pub fn command(&mut self, axis: Orientation, command: ScrollCommand) {
        match command {
            ScrollCommand::MoveTo(fraction) => self.moveto(axis, fraction),
            ScrollCommand::Scroll(count, unit) => self.scroll(axis, count, unit),
        }
    }

    fn span(&self, axis: Orientation) -> Option<(i32, i32)> {
        let region = self.scroll_region?;
        Some(match axis {
            Orientation::Horizontal => (region.x as i32, region.width as i32),
            Orientation::Vertical => (region.y as i32, region.height as i32),
        })
    }

    fn extent(&self, axis: Orientation) -> i32 {
        match axis {
            Orientation::Horizontal => self.width as i32,
            Orientation::Vertical => self.height as i32,
        }
    }

    fn increment(&self, axis: Orientation) -> Option<u16> {
        match axis {
            Orientation::Horizontal => self.x_increment,
            Orientation::Vertical => self.y_increment,
        }
    }

    fn axis_origin(&self, axis: Orientation) -> i32 {
        match axis {
            Orientation::Horizontal => self.origin_x,
            Orientation::Vertical => self.origin_y,
        }
    }

    fn set_origin(&mut self, axis: Orientation, proposed: i32) {
        let origin = self.confine(axis, proposed);
        match axis {
            Orientation::Horizontal => self.origin_x = origin,
            Orientation::Vertical => self.origin_y = origin,
        }
    }

    fn reconfine(&mut self) {
        self.set_origin(Orientation::Horizontal, self.origin_x);
        self.set_origin(Orientation::Vertical, self.origin_y);
    }

    /// Keep the view inside the scroll region.
    ///
    /// A region larger than the viewport must cover it completely; a smaller
    /// region must stay completely visible, which leaves room to shift it
    /// anywhere between the two edges.
    fn confine(&self, axis: Orientation, proposed: i32) -> i32 {
        let Some((start, len)) = self.span(axis) else {
            return proposed;
        };
        let proposed = i64::from(proposed);
        let left = proposed - i64::from(start);
        let right = i64::from(start) + i64::from(len) - (proposed + i64::from(self.extent(axis)));
        let confined = if left < 0 && right > 0 {
            proposed + (-left).min(right)
        } else if right < 0 && left > 0 {
            proposed - (-right).min(left)
        } else {
            proposed
        };
        // Lies between `proposed` and a region edge.
        confined.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

/// Smallest rectangle enclosing every item, or `None` when there are none.
pub fn bbox(items: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    items.into_iter().reduce(|acc, item| acc.union(&item))
}
