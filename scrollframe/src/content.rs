//! The content area: a grid of caller-supplied widgets.
//!
//! Each row is as tall, and each column as wide, as its largest child plus
//! that child's padding on both sides. Children are centered in their cells.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::types::Style;
use crate::widget::{clip_signed, Widget};

/// Grid cell and padding of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridOptions {
    pub row: u16,
    pub column: u16,
    pub padx: u16,
    pub pady: u16,
}

impl GridOptions {
    pub fn at(row: u16, column: u16) -> Self {
        Self {
            row,
            column,
            ..Self::default()
        }
    }

    pub fn padding(mut self, padx: u16, pady: u16) -> Self {
        self.padx = padx;
        self.pady = pady;
        self
    }
}

#[derive(Debug)]
struct GridChild {
    widget: Box<dyn Widget>,
    options: GridOptions,
}

impl GridChild {
    fn outer_size(&self) -> (u32, u32) {
        let (w, h) = self.widget.size();
        (
            w as u32 + 2 * self.options.padx as u32,
            h as u32 + 2 * self.options.pady as u32,
        )
    }
}

#[derive(Debug, Default)]
pub struct ContentArea {
    children: Vec<GridChild>,
    style: Style,
    /// Size announced by the last resize notification.
    reported: Option<(u16, u16)>,
}

impl ContentArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `widget` in the grid.
    pub fn grid(&mut self, widget: impl Widget + 'static, options: GridOptions) -> &mut Self {
        self.children.push(GridChild {
            widget: Box::new(widget),
            options,
        });
        self
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn tracks(&self) -> (Vec<u32>, Vec<u32>) {
        let mut columns: Vec<u32> = Vec::new();
        let mut rows: Vec<u32> = Vec::new();
        for child in &self.children {
            let (w, h) = child.outer_size();
            let (col, row) = (child.options.column as usize, child.options.row as usize);
            if columns.len() <= col {
                columns.resize(col + 1, 0);
            }
            if rows.len() <= row {
                rows.resize(row + 1, 0);
            }
            columns[col] = columns[col].max(w);
            rows[row] = rows[row].max(h);
        }
        (columns, rows)
    }

    /// Measured width and height.
    pub fn size(&self) -> (u16, u16) {
        let (columns, rows) = self.tracks();
        (
            saturate(columns.iter().sum()),
            saturate(rows.iter().sum()),
        )
    }

    /// Rectangles of the children relative to the content area's origin, in
    /// insertion order.
    pub fn child_rects(&self) -> Vec<Rect> {
        let (columns, rows) = self.tracks();
        let column_starts = starts(&columns);
        let row_starts = starts(&rows);

        self.children
            .iter()
            .map(|child| {
                let (w, h) = child.widget.size();
                let (outer_w, outer_h) = child.outer_size();
                let col = child.options.column as usize;
                let row = child.options.row as usize;
                let x = column_starts[col]
                    + child.options.padx as u32
                    + (columns[col] - outer_w) / 2;
                let y = row_starts[row] + child.options.pady as u32 + (rows[row] - outer_h) / 2;
                Rect::new(saturate(x), saturate(y), w, h)
            })
            .collect()
    }

    /// Report a size change since the last call, if any.
    pub(crate) fn take_resize(&mut self) -> Option<(u16, u16)> {
        let size = self.size();
        if self.reported == Some(size) {
            return None;
        }
        self.reported = Some(size);
        Some(size)
    }

    /// Draw with the content origin at `(x, y)`, clipped to `clip`.
    pub fn render(&self, buf: &mut Buffer, x: i32, y: i32, clip: Rect) {
        let (width, height) = self.size();
        if self.style.background.is_some() {
            buf.fill(clip_signed(x, y, width, height, clip), &self.style);
        }
        for (child, rect) in self.children.iter().zip(self.child_rects()) {
            child
                .widget
                .render(buf, x + rect.x as i32, y + rect.y as i32, clip);
        }
    }
}

fn starts(tracks: &[u32]) -> Vec<u32> {
    tracks
        .iter()
        .scan(0u32, |acc, len| {
            let start = *acc;
            *acc += len;
            Some(start)
        })
        .collect()
}

fn saturate(n: u32) -> u16 {
    n.min(u16::MAX as u32) as u16
}
