//! Immutable run configuration: grid dimensions, pacing and the validated
//! parameter set the simulation loop consumes.
//!
//! Everything here is built once before the loop starts and never mutated
//! afterwards.

use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 60;
pub const DEFAULT_MAX_GENERATIONS: u32 = 1000;

/// Grid dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Largest particle count a run accepts: a quarter of the grid.
    #[must_use]
    pub fn max_particles(&self) -> usize {
        self.area() / 4
    }
}

/// Visual pacing between frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pacing {
    /// Pause after the initial, pre-simulation frame.
    pub initial: Duration,
    /// Pause after every generation's frame.
    pub frame: Duration,
    /// Hold on the final frame once the grid has settled.
    pub settle_hold: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(100),
            frame: Duration::from_millis(50),
            settle_hold: Duration::from_millis(1000),
        }
    }
}

impl Pacing {
    #[must_use]
    pub fn with_frame_delay(self, frame: Duration) -> Self {
        Self { frame, ..self }
    }
}

/// Validated parameters for one run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimulationParameters {
    particle_count: usize,
    grid: GridConfig,
    max_generations: u32,
    pacing: Pacing,
}

impl SimulationParameters {
    /// Rejects counts outside `(0, width * height / 4]`.
    pub fn new(particle_count: usize, grid: GridConfig) -> Result<Self> {
        check_particle_count(particle_count, &grid)?;
        Ok(Self {
            particle_count,
            grid,
            max_generations: DEFAULT_MAX_GENERATIONS,
            pacing: Pacing::default(),
        })
    }

    /// Parses a raw command-line particle count.
    ///
    /// Non-numeric input and out-of-range numbers are reported with the same
    /// message so the caller cannot tell them apart.
    pub fn parse(raw: &str, grid: GridConfig) -> Result<Self> {
        let count = raw
            .parse::<i64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&n| n > 0 && n <= grid.max_particles())
            .ok_or_else(|| particle_count_error(&grid))?;
        Self::new(count, grid)
    }

    #[must_use]
    pub fn with_max_generations(self, max_generations: u32) -> Self {
        Self {
            max_generations,
            ..self
        }
    }

    #[must_use]
    pub fn with_pacing(self, pacing: Pacing) -> Self {
        Self { pacing, ..self }
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    #[must_use]
    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }
}

pub(crate) fn check_particle_count(count: usize, grid: &GridConfig) -> Result<()> {
    if count == 0 || count > grid.max_particles() {
        return Err(particle_count_error(grid));
    }
    Ok(())
}

fn particle_count_error(grid: &GridConfig) -> Error {
    Error::invalid(format!(
        "number of sand particles must be a positive integer less than or equal to {}",
        grid.max_particles()
    ))
}
