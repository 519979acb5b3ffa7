use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// The top-level window: a raw-mode alternate screen with mouse capture.
///
/// Frames are drawn into a cell buffer and only cells that differ from the
/// previous frame are written out. The terminal is restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        let (width, height) = open(&mut stdout, terminal::size)?;
        log::debug!("[terminal] opened at {}x{}", width, height);

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn area(&self) -> Rect {
        self.current_buffer.area()
    }

    /// Wait for input. With no timeout, blocks until at least one event
    /// arrives. Pending events are drained in one call.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if let Some(dur) = timeout {
            if !event::poll(dur)? {
                return Ok(events);
            }
        }

        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    /// Pick up a terminal size change and return the full drawing area.
    pub fn autoresize(&mut self) -> io::Result<Rect> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("[terminal] resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(self.area())
    }

    /// Draw one frame. `draw` paints into a cleared buffer the size of the
    /// terminal.
    pub fn draw<F>(&mut self, draw: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        self.autoresize()?;
        self.current_buffer.clear();
        draw(&mut self.current_buffer);
        self.flush_diff()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style.bold != last_style.bold {
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Enter the alternate screen and query its size. Raw mode must already be
/// on; if any step fails the terminal is restored before the error returns.
fn open<W: Write>(out: &mut W, size: impl FnOnce() -> io::Result<(u16, u16)>) -> io::Result<(u16, u16)> {
    let opened = enter(out).and_then(|()| size());
    if opened.is_err() {
        restore(out);
    }
    opened
}

fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;
    out.flush()
}

fn restore<W: Write>(out: &mut W) {
    let _ = queue!(
        out,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}
