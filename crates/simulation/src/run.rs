//! The simulation loop: seed, then step/render/pause/compare until the grid
//! settles or the generation cap runs out.
//!
//! ```text
//! Initializing ──▶ Running ──▶ Stable     (grid unchanged by a step)
//!                         └──▶ Exhausted  (max generations reached)
//! ```
//!
//! Rendering and pacing are injected through [`Renderer`] and [`Pacer`] so
//! the loop runs synchronously in tests with no terminal and no sleeping.

use std::io;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::config::SimulationParameters;
use crate::error::{Error, Result};
use crate::seed::seed;
use crate::stability::Snapshot;
use crate::Grid;

/// Draws one frame. The grid is only borrowed for the duration of the call.
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

/// The delay step between frames.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread for each pause.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Skips every pause.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Initializing,
    Running { generation: u32 },
    Stable { generation: u32 },
    Exhausted { generations: u32 },
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stable { .. } | Self::Exhausted { .. })
    }
}

/// How a run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The step numbered `generation` (1-based) left the grid unchanged.
    Stable { generation: u32, grains: usize },
    /// Every allowed generation ran without the grid settling.
    Exhausted { generations: u32, grains: usize },
}

impl Outcome {
    #[must_use]
    pub fn grains(self) -> usize {
        match self {
            Self::Stable { grains, .. } | Self::Exhausted { grains, .. } => grains,
        }
    }
}

#[derive(Debug)]
pub struct Simulation {
    params: SimulationParameters,
    grid: Grid,
    phase: Phase,
}

impl Simulation {
    /// Builds an empty grid for already-validated parameters.
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            grid: Grid::with_config(params.grid()),
            params,
            phase: Phase::Initializing,
        }
    }

    /// Starts from a caller-supplied grid instead of random seeding.
    ///
    /// The parameters' particle count is ignored by [`Simulation::run_from`].
    #[must_use]
    pub fn from_grid(params: SimulationParameters, grid: Grid) -> Self {
        Self {
            params,
            grid,
            phase: Phase::Initializing,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seeds the grid from `rng` and runs to completion.
    pub fn run<R, V, P>(
        &mut self,
        rng: &mut R,
        renderer: &mut V,
        pacer: &mut P,
    ) -> Result<Outcome>
    where
        R: Rng,
        V: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        let placed = seed(&mut self.grid, self.params.particle_count(), rng)?;
        log::info!(
            "seeded {placed} grains on a {}x{} grid",
            self.grid.width,
            self.grid.height
        );
        self.run_from(renderer, pacer)
    }

    /// Runs to completion from the current grid contents.
    pub fn run_from<V, P>(&mut self, renderer: &mut V, pacer: &mut P) -> Result<Outcome>
    where
        V: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        let pacing = self.params.pacing();
        let max_generations = self.params.max_generations();

        renderer.render(&self.grid).map_err(Error::Render)?;
        pacer.pause(pacing.initial);
        let mut snapshot = Snapshot::of(&self.grid);

        for generation in 1..=max_generations {
            self.phase = Phase::Running { generation };
            let moved = self.grid.step();
            renderer.render(&self.grid).map_err(Error::Render)?;
            pacer.pause(pacing.frame);

            if snapshot.matches(&self.grid) {
                self.phase = Phase::Stable { generation };
                log::info!("grid settled after {generation} generations");
                pacer.pause(pacing.settle_hold);
                return Ok(Outcome::Stable {
                    generation,
                    grains: self.grid.filled_count(),
                });
            }
            log::trace!("generation {generation}: {moved} grains moved");
            snapshot = Snapshot::of(&self.grid);
        }

        self.phase = Phase::Exhausted {
            generations: max_generations,
        };
        log::info!("stopped after {max_generations} generations without settling");
        Ok(Outcome::Exhausted {
            generations: max_generations,
            grains: self.grid.filled_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::config::{GridConfig, Pacing};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Records every frame and every pause.
    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<Grid>,
        pauses: Vec<Duration>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, grid: &Grid) -> io::Result<()> {
            self.frames.push(grid.clone());
            Ok(())
        }
    }

    impl Pacer for Recorder {
        fn pause(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }

    struct BrokenSurface;

    impl Renderer for BrokenSurface {
        fn render(&mut self, _grid: &Grid) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn params(width: usize, height: usize) -> SimulationParameters {
        SimulationParameters::new(1, GridConfig::new(width, height).unwrap()).unwrap()
    }

    #[test]
    fn already_stable_grid_stops_on_first_comparison() {
        let grid = Grid::from_rows(&[".....", ".....", ".....", "#####"]);
        let mut sim = Simulation::from_grid(params(5, 4), grid.clone());
        let mut frames = Recorder::default();
        let mut pacer = Recorder::default();

        let outcome = sim.run_from(&mut frames, &mut pacer).unwrap();

        assert_eq!(outcome, Outcome::Stable { generation: 1, grains: 5 });
        assert_eq!(sim.phase(), Phase::Stable { generation: 1 });
        assert_eq!(frames.frames, vec![grid.clone(), grid]);
        let pacing = Pacing::default();
        assert_eq!(pacer.pauses, vec![pacing.initial, pacing.frame, pacing.settle_hold]);
    }

    #[test]
    fn single_grain_settles_after_reaching_floor() {
        let mut grid = Grid::new(5, 4);
        grid.set(2, 0, Cell::filled());
        let mut sim = Simulation::from_grid(params(5, 4), grid);
        let mut frames = Recorder::default();

        let outcome = sim.run_from(&mut frames, &mut NoDelay).unwrap();

        // Three falling steps, then one step that changes nothing.
        assert_eq!(outcome, Outcome::Stable { generation: 4, grains: 1 });
        assert!(frames.frames[1].get(2, 1).filled);
        assert!(sim.grid().get(2, 3).filled);
        assert_eq!(frames.frames.len(), 5);
    }

    #[test]
    fn cap_reached_is_exhausted_without_hold() {
        let mut grid = Grid::new(3, 10);
        grid.set(1, 0, Cell::filled());
        let params = params(3, 10).with_max_generations(3);
        let mut sim = Simulation::from_grid(params, grid);
        let mut frames = Recorder::default();
        let mut pacer = Recorder::default();

        let outcome = sim.run_from(&mut frames, &mut pacer).unwrap();

        assert_eq!(outcome, Outcome::Exhausted { generations: 3, grains: 1 });
        assert!(sim.phase().is_terminal());
        assert_eq!(frames.frames.len(), 4);
        let pacing = Pacing::default();
        assert_eq!(pacer.pauses.len(), 4);
        assert!(!pacer.pauses.contains(&pacing.settle_hold));
    }

    #[test]
    fn render_failure_is_fatal() {
        let mut sim = Simulation::new(params(5, 4));
        let mut rng = StdRng::seed_from_u64(3);
        let err = sim.run(&mut rng, &mut BrokenSurface, &mut NoDelay).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert_eq!(sim.phase(), Phase::Initializing);
    }

    #[test]
    fn seeded_run_is_deterministic() {
        let params = SimulationParameters::new(200, GridConfig::new(40, 24).unwrap()).unwrap();
        let run = |seed| {
            let mut sim = Simulation::new(params);
            let outcome = sim
                .run(&mut StdRng::seed_from_u64(seed), &mut Recorder::default(), &mut NoDelay)
                .unwrap();
            (outcome, sim.grid().clone())
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn zero_delay_pacing_is_accepted() {
        let zero = Pacing {
            initial: Duration::ZERO,
            frame: Duration::ZERO,
            settle_hold: Duration::ZERO,
        };
        let params = params(4, 4).with_pacing(zero);
        let mut sim = Simulation::new(params);
        let outcome = sim
            .run(&mut StdRng::seed_from_u64(0), &mut Recorder::default(), &mut ThreadSleep)
            .unwrap();
        assert!(matches!(outcome, Outcome::Stable { .. }));
    }
}
