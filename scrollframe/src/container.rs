//! A container with horizontal and vertical scrolling.
//!
//! [`ScrollableFrame`] owns a viewport ([`Canvas`]), a [`ContentArea`] shown
//! through it, and two [`Scrollbar`]s. Widgets go into the content area, never
//! into the frame itself:
//!
//! ```
//! use scrollframe::{GridOptions, Label, Rect, ScrollableFrame};
//!
//! let mut frame = ScrollableFrame::new();
//! frame
//!     .content_mut()
//!     .grid(Label::new("hello"), GridOptions::at(0, 0));
//! frame.layout(Rect::new(0, 0, 40, 10));
//! ```
//!
//! Content that fits the viewport horizontally is centered; content that
//! fits vertically stays put and ignores vertical scrolling.

use crate::buffer::Buffer;
use crate::canvas::Canvas;
use crate::config::{ScrollConfig, WheelScope};
use crate::content::ContentArea;
use crate::event::{Event, MouseButton};
use crate::layout::Rect;
use crate::scroll::{Orientation, ScrollCommand};
use crate::scrollbar::{Scrollbar, ScrollbarHit};
use crate::types::Style;
use crate::wheel::WheelEvent;

/// What a horizontal scroll request turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalScroll {
    /// Content is wider than the viewport; the command was applied as is.
    Forwarded(ScrollCommand),
    /// Content fits; the command was dropped and the view moved to this
    /// fraction to center the content.
    Centered(f64),
}

/// View fraction that centers content `content_width` wide in a viewport
/// `viewport_width` wide.
///
/// Negative when the content is narrower than the viewport. Empty content
/// has nothing to center and yields `0.0`.
pub fn centering_offset(viewport_width: u16, content_width: u16) -> f64 {
    if content_width == 0 {
        return 0.0;
    }
    (1.0 - viewport_width as f64 / content_width as f64) / 2.0
}

#[derive(Debug)]
pub struct ScrollableFrame {
    canvas: Canvas,
    content: ContentArea,
    xscrollbar: Scrollbar,
    yscrollbar: Scrollbar,
    area: Rect,
    viewport: Rect,
    config: ScrollConfig,
}

impl Default for ScrollableFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollableFrame {
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    pub fn with_config(config: ScrollConfig) -> Self {
        let mut canvas = Canvas::with_increments(config.x_increment, config.y_increment);
        canvas.create_window(0, 0);

        let mut frame = Self {
            canvas,
            content: ContentArea::new(),
            xscrollbar: Scrollbar::new(Orientation::Horizontal),
            yscrollbar: Scrollbar::new(Orientation::Vertical),
            area: Rect::default(),
            viewport: Rect::default(),
            config,
        };

        frame.canvas.xview_moveto(0.0);
        frame.canvas.yview_moveto(0.0);
        frame.sync_scrollbars();
        frame
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentArea {
        &self.content
    }

    /// The content area. Call [`update`](Self::update) (or
    /// [`layout`](Self::layout)) after changing it.
    pub fn content_mut(&mut self) -> &mut ContentArea {
        &mut self.content
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn xscrollbar(&self) -> &Scrollbar {
        &self.xscrollbar
    }

    pub fn yscrollbar(&self) -> &Scrollbar {
        &self.yscrollbar
    }

    /// Area given to the frame by its last [`layout`](Self::layout).
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Area of the visible clipping region.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Scroll horizontally, or center the content if it fits.
    ///
    /// `width` overrides the viewport width used for centering, for callers
    /// that know the new width before the viewport does.
    pub fn scroll_horizontal(&mut self, command: ScrollCommand, width: Option<u16>) -> HorizontalScroll {
        let outcome = if !self.canvas.xview().is_fully_visible() {
            self.canvas.xview_command(command);
            log::trace!("[scrollframe] x {:?} -> origin {:?}", command, self.canvas.origin());
            HorizontalScroll::Forwarded(command)
        } else {
            let width = width.unwrap_or_else(|| self.canvas.width());
            let offset = centering_offset(width, self.content.size().0);
            self.canvas.xview_moveto(offset);
            log::trace!("[scrollframe] centering at {:.3}", offset);
            HorizontalScroll::Centered(offset)
        };
        self.sync_scrollbars();
        outcome
    }

    /// Scroll vertically. Returns false, doing nothing, if the content fits.
    pub fn scroll_vertical(&mut self, command: ScrollCommand) -> bool {
        if self.canvas.yview().is_fully_visible() {
            log::trace!("[scrollframe] y {:?} dropped, content fits", command);
            return false;
        }
        self.canvas.yview_command(command);
        log::trace!("[scrollframe] y {:?} -> origin {:?}", command, self.canvas.origin());
        self.sync_scrollbars();
        true
    }

    /// The viewport now measures `width` x `height`.
    pub fn on_viewport_resized(&mut self, width: u16, height: u16) {
        log::debug!("[scrollframe] viewport resized to {}x{}", width, height);
        self.refresh_scroll_region();
        self.scroll_horizontal(ScrollCommand::NUDGE, Some(width));
    }

    /// The content area changed size.
    pub fn on_content_resized(&mut self) {
        log::debug!("[scrollframe] content resized to {:?}", self.content.size());
        self.refresh_scroll_region();
        self.scroll_horizontal(ScrollCommand::NUDGE, None);
    }

    /// Scroll vertically by one wheel event. Returns true if the view moved
    /// (or was asked to move).
    pub fn on_wheel(&mut self, wheel: &WheelEvent) -> bool {
        match wheel.normalize(self.config.platform) {
            Some(units) => self.scroll_vertical(ScrollCommand::units(units)),
            None => {
                log::trace!(
                    "[scrollframe] ignoring {:?} on {}",
                    wheel,
                    self.config.platform
                );
                false
            }
        }
    }

    /// Place the frame. The viewport takes all but the last row and column,
    /// which hold the scrollbars; the corner cell stays empty.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        self.viewport = Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(1),
            area.height.saturating_sub(1),
        );
        self.xscrollbar.place(Rect::new(
            area.x,
            self.viewport.bottom(),
            self.viewport.width,
            area.height.min(1),
        ));
        self.yscrollbar.place(Rect::new(
            self.viewport.right(),
            area.y,
            area.width.min(1),
            self.viewport.height,
        ));

        if self.canvas.resize(self.viewport.width, self.viewport.height) {
            self.on_viewport_resized(self.viewport.width, self.viewport.height);
        }
        self.update();
    }

    /// Deliver a pending content resize. Returns true if there was one.
    pub fn update(&mut self) -> bool {
        if self.content.take_resize().is_some() {
            self.on_content_resized();
            true
        } else {
            false
        }
    }

    /// Handle wheel and scrollbar input. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Wheel { x, y, wheel } => {
                if self.config.wheel_scope == WheelScope::Viewport && !self.viewport.contains(x, y) {
                    return false;
                }
                self.on_wheel(&wheel)
            }
            Event::Press {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if let Some(hit) = self.xscrollbar.press(x, y) {
                    if let ScrollbarHit::Trough(command) = hit {
                        self.scroll_horizontal(command, None);
                    }
                    return true;
                }
                if let Some(hit) = self.yscrollbar.press(x, y) {
                    if let ScrollbarHit::Trough(command) = hit {
                        self.scroll_vertical(command);
                    }
                    return true;
                }
                false
            }
            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if let Some(command) = self.xscrollbar.drag(x, y) {
                    self.scroll_horizontal(command, None);
                    return true;
                }
                if let Some(command) = self.yscrollbar.drag(x, y) {
                    self.scroll_vertical(command);
                    return true;
                }
                false
            }
            Event::Release {
                button: MouseButton::Left,
                ..
            } => {
                let x = self.xscrollbar.release();
                let y = self.yscrollbar.release();
                x || y
            }
            _ => false,
        }
    }

    pub fn render(&self, buf: &mut Buffer) {
        let theme = &self.config.theme;
        buf.fill(self.area, &Style::new().background(theme.background));

        let (origin_x, origin_y) = self.canvas.origin();
        let window = self.canvas.window().unwrap_or_default();
        self.content.render(
            buf,
            self.viewport.x as i32 + window.x as i32 - origin_x,
            self.viewport.y as i32 + window.y as i32 - origin_y,
            self.viewport,
        );

        self.xscrollbar.render(buf, theme);
        self.yscrollbar.render(buf, theme);
    }

    /// Size the window item to the content and make the scroll region
    /// enclose everything on the canvas.
    fn refresh_scroll_region(&mut self) {
        let (width, height) = self.content.size();
        self.canvas.resize_window(width, height);
        self.canvas.set_scroll_region(self.canvas.bbox_all());
    }

    fn sync_scrollbars(&mut self) {
        self.xscrollbar.set(self.canvas.xview());
        self.yscrollbar.set(self.canvas.yview());
    }
}
