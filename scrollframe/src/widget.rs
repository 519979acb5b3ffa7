use std::fmt;

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::text::measure;
use crate::types::Style;

/// Something that can be placed in a [`ContentArea`](crate::ContentArea).
pub trait Widget: fmt::Debug {
    /// Requested width and height in cells.
    fn size(&self) -> (u16, u16);

    /// Draw with the top-left corner at `(x, y)`, which may lie outside the
    /// buffer. Nothing outside `clip` may be touched.
    fn render(&self, buf: &mut Buffer, x: i32, y: i32, clip: Rect);
}

/// Multi-line text.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    style: Style,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn size(&self) -> (u16, u16) {
        let (width, lines) = measure(&self.text);
        (saturate(width), saturate(lines))
    }

    fn render(&self, buf: &mut Buffer, x: i32, y: i32, clip: Rect) {
        let (width, height) = self.size();
        if self.style.background.is_some() {
            buf.fill(clip_signed(x, y, width, height, clip), &self.style);
        }
        for (i, line) in self.text.split('\n').enumerate() {
            buf.put_str(x, y + i as i32, line, &self.style, clip);
        }
    }
}

/// A solid rectangle of a fixed size.
#[derive(Debug, Clone)]
pub struct Block {
    width: u16,
    height: u16,
    style: Style,
}

impl Block {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Block {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render(&self, buf: &mut Buffer, x: i32, y: i32, clip: Rect) {
        buf.fill(clip_signed(x, y, self.width, self.height, clip), &self.style);
    }
}

/// Part of the rectangle at signed `(x, y)` that lies inside `clip`.
pub(crate) fn clip_signed(x: i32, y: i32, width: u16, height: u16, clip: Rect) -> Rect {
    let left = x.max(clip.x as i32);
    let top = y.max(clip.y as i32);
    let right = (x + width as i32).min(clip.right() as i32);
    let bottom = (y + height as i32).min(clip.bottom() as i32);
    if right <= left || bottom <= top {
        return Rect::new(clip.x, clip.y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

fn saturate(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
