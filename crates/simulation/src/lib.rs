//! Falling sand cellular automaton.
//!
//! A fixed-size grid of filled/empty cells is seeded with random grains and
//! stepped until it stops changing or a generation cap is reached.

pub mod cell;
pub mod config;
pub mod error;
pub mod neighborhood;
pub mod run;
pub mod sand;
pub mod seed;
pub mod stability;

#[cfg(test)]
mod settle_test;

pub use cell::Cell;
pub use config::{GridConfig, Pacing, SimulationParameters};
pub use error::{Error, Result};
pub use run::{NoDelay, Outcome, Pacer, Phase, Renderer, Simulation, ThreadSleep};
pub use seed::seed;
pub use stability::{equal, Snapshot};

use neighborhood::Neighborhood;

/// 2D grid of cells stored row-major. Out-of-range access panics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn with_config(config: GridConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Builds a grid from text rows: `#` is filled, anything else empty.
    /// Width is taken from the longest row; short rows are padded empty.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set(x, y, Cell::filled());
                }
            }
        }
        grid
    }

    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// All cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }

    /// Row slices from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() rejects a zero chunk size.
        self.cells.chunks(self.width.max(1))
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.filled).count()
    }

    /// Advance the simulation by one generation.
    ///
    /// Scans from the second-to-last row up to the top, left to right within
    /// a row. Grains only ever move into the row below, which has already been
    /// scanned, so each starting grain is updated at most once.
    /// Returns how many grains moved.
    pub fn step(&mut self) -> usize {
        let mut moved = 0;
        for y in (0..self.height.saturating_sub(1)).rev() {
            for x in 0..self.width {
                if self.get(x, y).is_empty() {
                    continue;
                }
                let mut view = Neighborhood::new(self, x, y);
                if sand::update_sand(&mut view) {
                    moved += 1;
                }
            }
        }
        moved
    }
}

impl From<&Grid> for GridConfig {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
        }
    }
}
