//! sandfall - CLI entry point.
//!
//! Drops randomly placed sand grains into a bordered box in the terminal and
//! animates them until they settle or the generation cap is reached.

mod cli;
mod render;
mod surface;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sandfall_simulation::{Outcome, Simulation, SimulationParameters, ThreadSleep};

use cli::Cli;
use render::Theme;
use surface::TerminalSurface;

fn main() -> ExitCode {
    // Default to warn so log lines do not scribble over the animation.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print!("{}", err.render());
            return ExitCode::FAILURE;
        }
    };

    let params = match cli.parameters() {
        Ok(params) => params,
        Err(err) => {
            println!("{}", Cli::rejection(&err));
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, params) {
        Ok(outcome) => {
            log::info!("finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, params: SimulationParameters) -> Result<Outcome> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let grid = params.grid();
    let mut surface =
        TerminalSurface::acquire(grid.width + 2, grid.height + 2).context("terminal unavailable")?;
    let mut renderer = surface.renderer(Theme::default());

    let mut simulation = Simulation::new(params);
    let outcome = simulation
        .run(&mut rng, &mut renderer, &mut ThreadSleep)
        .context("simulation aborted")?;
    Ok(outcome)
}
