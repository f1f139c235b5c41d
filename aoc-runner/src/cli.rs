//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Day selector: a day number, `all`, or `timeall`.
    /// Runs the latest registered day if omitted.
    pub selector: Option<String>,

    /// Year to run
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/aoc-runner")]
    pub cache_dir: PathBuf,

    /// Path of the answer knowledge file
    #[arg(long, default_value = "knowledge.json")]
    pub knowledge_file: PathBuf,
}

/// What the positional selector resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// No argument: run the highest-numbered registered day
    Latest,
    /// `all`: run every registered day in ascending order
    All,
    /// `timeall`: time every day/part and print a leaderboard
    TimeAll,
    /// A specific day number
    Day(u8),
}

impl Selector {
    /// Parse the positional argument. Keywords are case-sensitive; anything
    /// else must be an integer day number.
    pub fn parse(arg: Option<&str>) -> Result<Self, String> {
        match arg {
            None => Ok(Self::Latest),
            Some("all") => Ok(Self::All),
            Some("timeall") => Ok(Self::TimeAll),
            Some(other) => other.parse::<u8>().map(Self::Day).map_err(|_| {
                format!("Invalid selector '{other}': expected a day number, 'all' or 'timeall'")
            }),
        }
    }
}
