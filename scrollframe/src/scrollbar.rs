//! Scrollbar primitive.
//!
//! A scrollbar mirrors the view the viewport last reported through [`Scrollbar::set`]
//! and turns pointer input into [`ScrollCommand`]s. It never moves the
//! viewport itself; its owner decides what to do with the commands.

use crate::buffer::Buffer;
use crate::config::Theme;
use crate::layout::Rect;
use crate::scroll::{Orientation, ScrollCommand, View};
use crate::types::Style;

/// Result of pressing the pointer on a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarHit {
    /// The thumb was grabbed; subsequent drags produce commands.
    Thumb,
    /// The trough was clicked, paging towards the pointer.
    Trough(ScrollCommand),
}

#[derive(Debug, Clone)]
pub struct Scrollbar {
    orientation: Orientation,
    view: View,
    area: Rect,
    /// Offset of the pointer from the thumb start while dragging.
    grab: Option<u16>,
}

impl Scrollbar {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            view: View::FULLY_VISIBLE,
            area: Rect::default(),
            grab: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set(&mut self, view: View) {
        self.view = view;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn place(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Start and length of the trough along the scrollbar's axis.
    fn track(&self) -> (u16, u16) {
        match self.orientation {
            Orientation::Horizontal => (self.area.x, self.area.width),
            Orientation::Vertical => (self.area.y, self.area.height),
        }
    }

    fn along(&self, x: u16, y: u16) -> u16 {
        match self.orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// Absolute start and length of the thumb. Zero length if there is no trough.
    pub fn thumb(&self) -> (u16, u16) {
        let (track_start, track_len) = self.track();
        if track_len == 0 {
            return (track_start, 0);
        }
        let len = track_len as f64;
        let start = (self.view.first * len).round() as u16;
        let end = (self.view.last * len).round() as u16;
        let size = end.saturating_sub(start).clamp(1, track_len);
        let start = start.min(track_len - size);
        (track_start + start, size)
    }

    pub fn press(&mut self, x: u16, y: u16) -> Option<ScrollbarHit> {
        if !self.area.contains(x, y) {
            return None;
        }
        let pos = self.along(x, y);
        let (thumb_start, thumb_len) = self.thumb();
        if pos < thumb_start {
            Some(ScrollbarHit::Trough(ScrollCommand::pages(-1)))
        } else if pos >= thumb_start + thumb_len {
            Some(ScrollbarHit::Trough(ScrollCommand::pages(1)))
        } else {
            self.grab = Some(pos - thumb_start);
            Some(ScrollbarHit::Thumb)
        }
    }

    /// Command moving the thumb so the grabbed point follows the pointer.
    pub fn drag(&mut self, x: u16, y: u16) -> Option<ScrollCommand> {
        let grab = self.grab?;
        let (track_start, track_len) = self.track();
        if track_len == 0 {
            return None;
        }
        let thumb_start = self.along(x, y) as i32 - grab as i32 - track_start as i32;
        let fraction = (thumb_start as f64 / track_len as f64).clamp(0.0, 1.0);
        Some(ScrollCommand::MoveTo(fraction))
    }

    /// End a drag. Returns true if one was in progress.
    pub fn release(&mut self) -> bool {
        self.grab.take().is_some()
    }

    pub fn render(&self, buf: &mut Buffer, theme: &Theme) {
        if self.area.is_empty() {
            return;
        }
        buf.fill(self.area, &Style::new().background(theme.trough));

        let (start, len) = self.thumb();
        let thumb = match self.orientation {
            Orientation::Horizontal => Rect::new(start, self.area.y, len, self.area.height),
            Orientation::Vertical => Rect::new(self.area.x, start, self.area.width, len),
        };
        let color = if self.is_dragging() {
            theme.thumb_active
        } else {
            theme.thumb
        };
        buf.fill(thumb, &Style::new().background(color));
    }
}
