use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::Style;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Paint the background of every cell in `rect` (clipped to the buffer).
    pub fn fill(&mut self, rect: Rect, style: &Style) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let idx = self.index(x, y);
                self.cells[idx] = Cell::styled(' ', style, &self.cells[idx]);
            }
        }
    }

    /// Write a single line of text starting at the signed position `(x, y)`.
    ///
    /// Only the part of the text falling inside `clip` (and the buffer) is
    /// written. Wide characters that would straddle the clip edge are dropped.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: &Style, clip: Rect) {
        let clip = clip.intersection(&self.area());
        if clip.is_empty() || y < clip.y as i32 || y >= clip.bottom() as i32 {
            return;
        }

        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch) as i32;
            if w == 0 {
                continue;
            }
            if col >= clip.right() as i32 {
                break;
            }
            if col >= clip.x as i32 && col + w <= clip.right() as i32 {
                let under = self.get(col as u16, y as u16).copied().unwrap_or_default();
                let cell = Cell::styled(ch, style, &under);
                self.set(col as u16, y as u16, cell);
                for extra in 1..w {
                    let mut cont = cell;
                    cont.char = ' ';
                    cont.wide_continuation = true;
                    self.set((col + extra) as u16, y as u16, cont);
                }
            }
            col += w;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Text of row `y`, skipping wide-character continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
