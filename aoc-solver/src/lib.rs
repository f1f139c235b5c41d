//! Advent of Code Solver Library
//!
//! The contract between the runner and the individual day solvers, plus a
//! registry that collects every solver linked into the binary.
//!
//! A day solver is a plain value implementing [`DaySolver`]: two part
//! functions from the day's input lines to an optional answer string, and an
//! optional diagnostic hook. Solvers announce themselves with
//! [`inventory::submit!`] and a [`DayPlugin`] entry; the runner builds a
//! [`SolverRegistry`] from everything submitted for its year.
//!
//! # Example
//!
//! ```
//! use aoc_solver::{DayPlugin, DaySolver, RunLog, SolverRegistry};
//!
//! struct Day1;
//!
//! impl DaySolver for Day1 {
//!     fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
//!         Some(input.len().to_string())
//!     }
//! }
//!
//! inventory::submit! {
//!     DayPlugin { year: 2023, day: 1, solver: &Day1 }
//! }
//!
//! let registry = SolverRegistry::from_plugins(2023).unwrap();
//! assert!(registry.get(1).is_some());
//! ```

mod error;
mod registry;
mod solver;

pub use error::RegistrationError;
pub use registry::{DayPlugin, SolverRegistry};
pub use solver::{DaySolver, RunLog};

// Re-export inventory so solution crates only need this crate in scope
// for `inventory::submit!`.
pub use inventory;
