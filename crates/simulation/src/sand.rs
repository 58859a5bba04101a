//! Sand rule: fall straight down, else down-left, else down-right, else rest.
//!
//! Left is always tried before right. No randomness.

use crate::neighborhood::Neighborhood;

const FALL_ORDER: [(isize, isize); 3] = [(0, 1), (-1, 1), (1, 1)];

/// Applies at most one move to the grain at the centre of `view`.
/// Returns whether the grain moved.
pub fn update_sand(view: &mut Neighborhood) -> bool {
    for (dx, dy) in FALL_ORDER {
        if view.is_open(dx, dy) {
            view.move_to(dx, dy);
            return true;
        }
    }
    false
}
