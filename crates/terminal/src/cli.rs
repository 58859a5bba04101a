//! Command-line arguments.

use std::time::Duration;

use clap::{CommandFactory, Parser};
use sandfall_simulation::config::{DEFAULT_HEIGHT, DEFAULT_MAX_GENERATIONS, DEFAULT_WIDTH};
use sandfall_simulation::{Error, GridConfig, Pacing, Result, SimulationParameters};

const DEFAULT_FRAME_DELAY_MS: u64 = 50;

/// Drop random grains of sand into a box and watch them settle.
#[derive(Debug, Parser)]
#[command(name = "sandfall", version, about, long_about = None)]
pub struct Cli {
    /// Number of sand particles, from 1 to WIDTH*HEIGHT/4.
    #[arg(value_name = "NUMBER_OF_SAND_PARTICLES", allow_hyphen_values = true)]
    pub particles: String,

    /// Grid width in cells.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_WIDTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=4096)
    )]
    pub width: u16,

    /// Grid height in cells.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_HEIGHT as u16,
        value_parser = clap::value_parser!(u16).range(1..=4096)
    )]
    pub height: u16,

    /// Stop after this many generations even if grains are still moving.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_GENERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_generations: u32,

    /// Milliseconds to pause after each frame.
    #[arg(
        long = "frame-delay-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_FRAME_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(0..=60_000)
    )]
    pub frame_delay_ms: u64,

    /// Seed for grain placement. Random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// Validates the arguments into run parameters.
    pub fn parameters(&self) -> Result<SimulationParameters> {
        let grid = GridConfig::new(usize::from(self.width), usize::from(self.height))?;
        let pacing = Pacing::default().with_frame_delay(Duration::from_millis(self.frame_delay_ms));
        Ok(SimulationParameters::parse(&self.particles, grid)?
            .with_max_generations(self.max_generations)
            .with_pacing(pacing))
    }

    /// Text printed when the arguments parse but do not validate.
    pub fn rejection(err: &Error) -> String {
        format!("{err}\n{}", Self::command().render_usage())
    }
}
