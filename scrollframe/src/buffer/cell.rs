use crate::types::{Rgb, Style, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    /// `char` drawn with `style` over `under`. Colors the style leaves unset
    /// show through from the cell underneath.
    pub fn styled(char: char, style: &Style, under: &Cell) -> Self {
        Self {
            char,
            fg: style.foreground.as_ref().map_or(under.fg, |c| c.to_rgb()),
            bg: style.background.as_ref().map_or(under.bg, |c| c.to_rgb()),
            style: style.text_style,
            wide_continuation: false,
        }
    }
}
