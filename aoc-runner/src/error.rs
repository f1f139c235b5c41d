//! Error types and exit codes for the runner
//!
//! Exit codes are part of the scripting contract: 0 success, 1 input
//! acquisition failed, 2 no solver registered for the requested day. Usage
//! errors and internal errors use codes outside that range so they can never
//! be mistaken for the first two.

use crate::knowledge::KnowledgeError;
use thiserror::Error;

/// Exit code for input-acquisition failure on the requested day
pub const EXIT_NO_INPUT: i32 = 1;
/// Exit code when no solver is registered for the requested day
pub const EXIT_NO_SOLVER: i32 = 2;
/// Exit code for command-line usage errors
pub const EXIT_USAGE: i32 = 64;
/// Exit code for internal failures (malformed knowledge store et al.)
pub const EXIT_INTERNAL: i32 = 70;

/// Errors from running one day or a timing sweep
#[derive(Error, Debug)]
pub enum RunError {
    /// No solver registered for the requested day
    #[error("No solution found for day {0}")]
    UnknownDay(u8),

    /// No solver registered at all (empty registry with no day argument)
    #[error("No solvers registered")]
    NoSolvers,

    /// Input neither cached nor fetchable for this day
    #[error("No input available for day {0}")]
    NoInput(u8),

    /// Knowledge store I/O or decode failure; always surfaced, never
    /// silently treated as Unknown
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line selector
    #[error("{0}")]
    Usage(String),

    /// Solver plugin registration failed
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Day execution failed
    #[error(transparent)]
    Run(#[from] RunError),
}

impl CliError {
    /// The process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Registration(_) => EXIT_INTERNAL,
            CliError::Run(RunError::UnknownDay(_)) | CliError::Run(RunError::NoSolvers) => {
                EXIT_NO_SOLVER
            }
            CliError::Run(RunError::NoInput(_)) => EXIT_NO_INPUT,
            CliError::Run(RunError::Knowledge(_)) => EXIT_INTERNAL,
        }
    }
}
