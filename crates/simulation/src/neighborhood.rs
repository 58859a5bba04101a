//! Relative-offset view of the grid around the cell being updated.

use crate::cell::Cell;
use crate::Grid;

/// Off-grid reads return `None`; moves are only issued toward on-grid targets.
#[derive(Debug)]
pub struct Neighborhood<'a> {
    pub grid: &'a mut Grid,
    pub x: usize,
    pub y: usize,
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a mut Grid, x: usize, y: usize) -> Self {
        Self { grid, x, y }
    }

    fn offset(&self, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        self.grid.contains(x, y).then_some((x, y))
    }

    #[must_use]
    pub fn get(&self, dx: isize, dy: isize) -> Option<Cell> {
        self.offset(dx, dy).map(|(x, y)| self.grid.get(x, y))
    }

    /// True when the offset is on the grid and empty.
    #[must_use]
    pub fn is_open(&self, dx: isize, dy: isize) -> bool {
        self.get(dx, dy).is_some_and(Cell::is_empty)
    }

    /// Moves the centre grain to the given offset, emptying the centre.
    pub fn move_to(&mut self, dx: isize, dy: isize) {
        if let Some((x, y)) = self.offset(dx, dy) {
            let me = self.grid.get(self.x, self.y);
            self.grid.set(x, y, me);
            self.grid.set(self.x, self.y, Cell::empty());
        }
    }
}
