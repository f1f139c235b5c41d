//! Error types for the solver library

use thiserror::Error;

/// Error type for registry construction failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two plugins were submitted for the same year-day combination
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// A plugin carries a day number outside 1-25
    #[error("Day {1} is out of range for year {0} (expected 1-25)")]
    InvalidDay(u16, u8),
}
