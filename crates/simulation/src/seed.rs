//! Random initial placement of sand grains.

use rand::Rng;

use crate::cell::Cell;
use crate::config::{check_particle_count, GridConfig};
use crate::error::Result;
use crate::Grid;

/// Draws `count` uniformly random positions and fills each one.
///
/// Repeated draws of the same position are kept, so fewer than `count`
/// cells may end up filled. Returns how many cells were newly filled.
pub fn seed<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) -> Result<usize> {
    check_particle_count(count, &GridConfig::from(&*grid))?;

    let mut placed = 0;
    for _ in 0..count {
        let x = rng.gen_range(0..grid.width);
        let y = rng.gen_range(0..grid.height);
        if grid.get(x, y).is_empty() {
            placed += 1;
        }
        grid.set(x, y, Cell::filled());
    }

    if placed < count {
        log::debug!("seeded {placed} of {count} grains ({} collisions)", count - placed);
    } else {
        log::debug!("seeded {placed} grains");
    }
    Ok(placed)
}
