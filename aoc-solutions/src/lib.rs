//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day is an independent module registering itself with a
//! `DayPlugin` via `inventory::submit!`. Days are domain trivia as far as
//! the runner is concerned: a function from input lines to an optional
//! answer, nothing more.

pub mod year_2023;

#[cfg(test)]
pub(crate) fn test_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
