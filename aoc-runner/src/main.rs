//! AOC runner - command-line interface for running Advent of Code solvers
//! with adaptive timing and answer verification.

mod bench;
mod cli;
mod config;
mod error;
mod input;
mod knowledge;
mod output;
mod runner;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistry;
use clap::Parser;
use cli::{Args, Selector};
use config::Config;
use error::{CliError, RunError};
use input::{InputCache, InputProvider, InputSource};
use knowledge::Knowledge;
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        match &e {
            CliError::Usage(_) | CliError::Run(RunError::UnknownDay(_) | RunError::NoSolvers | RunError::NoInput(_)) => {
                output::warn(e.to_string())
            }
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = SolverRegistry::from_plugins(config.year)?;
    let knowledge = Knowledge::load(&config.knowledge_file).map_err(RunError::Knowledge)?;
    let provider = InputProvider::new(InputCache::new(config.cache_dir.clone()), config.session);
    let mut runner = Runner::new(&registry, provider, knowledge, bench::BenchLimits::default());

    match config.selector {
        Selector::Latest => {
            let day = registry.latest_day().ok_or(RunError::NoSolvers)?;
            run_single(&mut runner, day)
        }
        Selector::Day(day) => run_single(&mut runner, day),
        Selector::All => run_all(&mut runner, &registry),
        Selector::TimeAll => {
            let report = runner.time_all()?;
            output::render_time_all(&report);
            Ok(())
        }
    }
}

fn run_single<I: InputSource>(runner: &mut Runner<'_, I>, day: u8) -> Result<(), CliError> {
    println!("Running day {day}\n");
    let report = runner.run_day(day)?;
    output::render_day(&report);
    Ok(())
}

/// Run every registered day in order. A day without input is skipped with a
/// notice and never aborts the sweep.
fn run_all<I: InputSource>(
    runner: &mut Runner<'_, I>,
    registry: &SolverRegistry,
) -> Result<(), CliError> {
    let days: Vec<u8> = registry.days().collect();
    for day in days {
        println!("Running day {day}\n");
        match runner.run_day(day) {
            Ok(report) => output::render_day(&report),
            Err(RunError::NoInput(day)) => {
                output::warn(format!("No input available for day {day}"));
                println!();
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
