//! Draws the grid inside a box-drawing border with crossterm.
//!
//! The frame is `(width + 2) × (height + 2)` characters: one border cell on
//! every side of the grid interior.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};
use sandfall_simulation::{Grid, Renderer};

/// Glyphs and colors used for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub sand: char,
    pub empty: char,
    pub sand_color: Color,
    pub empty_color: Color,
    pub border_color: Color,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sand: '█',
            empty: ' ',
            sand_color: Color::Yellow,
            empty_color: Color::Reset,
            border_color: Color::White,
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        }
    }
}

impl Theme {
    /// Glyph and color at frame position (`col`, `row`), border included.
    #[must_use]
    pub fn glyph_at(&self, grid: &Grid, col: usize, row: usize) -> (char, Color) {
        let right = grid.width + 1;
        let bottom = grid.height + 1;
        let border = |ch| (ch, self.border_color);
        match (col, row) {
            (0, 0) => border(self.top_left),
            (c, 0) if c == right => border(self.top_right),
            (0, r) if r == bottom => border(self.bottom_left),
            (c, r) if c == right && r == bottom => border(self.bottom_right),
            (_, 0) => border(self.horizontal),
            (_, r) if r == bottom => border(self.horizontal),
            (0, _) => border(self.vertical),
            (c, _) if c == right => border(self.vertical),
            (c, r) => {
                if grid.get(c - 1, r - 1).filled {
                    (self.sand, self.sand_color)
                } else {
                    (self.empty, self.empty_color)
                }
            }
        }
    }
}

/// Writes whole frames to `out`, one synchronized update per frame.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        let mut current = None;
        for row in 0..grid.height + 2 {
            queue!(self.out, MoveTo(0, row as u16))?;
            for col in 0..grid.width + 2 {
                let (ch, color) = self.theme.glyph_at(grid, col, row);
                if current != Some(color) {
                    queue!(self.out, SetForegroundColor(color))?;
                    current = Some(color);
                }
                queue!(self.out, Print(ch))?;
            }
        }
        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}
