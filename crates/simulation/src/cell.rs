//! Cell type for the simulation grid.

/// One grid position: either holds a sand grain or is empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub filled: bool,
}

impl Cell {
    #[must_use]
    pub fn empty() -> Self {
        Self { filled: false }
    }

    #[must_use]
    pub fn filled() -> Self {
        Self { filled: true }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.filled
    }
}
