//! Settle detection by comparing a grid against the previous generation.

use crate::cell::Cell;
use crate::Grid;

/// Deep comparison of filled/empty state at every coordinate.
/// Grids with different dimensions are never equal.
#[must_use]
pub fn equal(a: &Grid, b: &Grid) -> bool {
    a.width == b.width && a.height == b.height && a.cells == b.cells
}

/// Frozen copy of a grid's cells taken before a generation runs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Box<[Cell]>,
}

impl Snapshot {
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells.as_slice().into(),
        }
    }

    /// True when `grid` has not changed since this snapshot was taken.
    #[must_use]
    pub fn matches(&self, grid: &Grid) -> bool {
        self.width == grid.width && self.height == grid.height && *self.cells == *grid.cells
    }
}
