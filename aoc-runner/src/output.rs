//! Console rendering for day reports and timing sweeps
//!
//! Recoverable failures are single styled lines; answers are bold yellow,
//! runtimes cyan, solver log lines prefixed with `| `.

use crate::bench::RunStats;
use crate::knowledge::CheckResult;
use crate::runner::{DayReport, MiscReport, PartOutcome, TimeAllReport};
use itertools::Itertools;

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const CYAN: &str = "\u{1b}[36m";
const GRAY: &str = "\u{1b}[90m";
const BOLD: &str = "\u{1b}[1m";
const BOLD_YELLOW: &str = "\u{1b}[1;33m";
const RESET: &str = "\u{1b}[0m";

/// Print an error-toned single-line notice
pub fn warn(msg: impl AsRef<str>) {
    println!("{RED}{}{RESET}", msg.as_ref());
}

/// Format microseconds: below 1000µs as µs, above as ms
pub fn format_micros(us: f64) -> String {
    if us < 1000.0 {
        format!("{us:.1}µs")
    } else {
        format!("{:.2}ms", us / 1000.0)
    }
}

fn format_stats(stats: &RunStats) -> String {
    format!(
        "{} ± {} ({} runs)",
        format_micros(stats.average_us),
        format_micros(stats.std_dev_us),
        stats.samples
    )
}

fn render_check(check: &CheckResult) {
    match check {
        CheckResult::Correct => println!("{GREEN}✓ matches recorded solution{RESET}"),
        CheckResult::Incorrect(reference) => {
            println!("{RED}✗ expected {reference}{RESET}")
        }
        CheckResult::TooBig(bound) => {
            println!("{RED}✗ too big (known upper bound {bound}){RESET}")
        }
        CheckResult::TooSmall(bound) => {
            println!("{RED}✗ too small (known lower bound {bound}){RESET}")
        }
        CheckResult::Unknown => println!("{GRAY}? not verified{RESET}"),
    }
}

/// Render one day's report: both parts, then the misc section if present
pub fn render_day(report: &DayReport) {
    for part in &report.parts {
        println!("{BOLD}Part {}:{RESET}", part.part);
        for line in &part.log {
            println!("| {line}");
        }
        match &part.outcome {
            PartOutcome::Solved { answer, check } => {
                println!("{BOLD_YELLOW}{answer}{RESET}");
                render_check(check);
            }
            PartOutcome::NoSolution => warn("No solution found"),
            PartOutcome::Crashed { message } => warn(format!("Solver crashed: {message}")),
        }
        match &part.timing {
            Ok(stats) => println!("{CYAN}Runtime: {}{RESET}", format_stats(stats)),
            Err(e) => warn(format!("Timing failed: {e}")),
        }
        println!();
    }
    render_misc(&report.misc);
}

fn render_misc(misc: &MiscReport) {
    if misc.is_empty() {
        return;
    }
    println!("{BOLD}Misc:{RESET}");
    for line in &misc.log {
        println!("| {line}");
    }
    if let Some(message) = &misc.error {
        warn(format!("Misc action failed: {message}"));
    }
    println!();
}

/// Render a `timeall` sweep: per-part lines grouped by day, then the
/// leaderboard summary
pub fn render_time_all(report: &TimeAllReport) {
    let day_count = report.entries.iter().map(|e| e.day).unique().count();
    println!(
        "{BOLD}Timed {} parts across {} days of {}{RESET}\n",
        report.entries.len(),
        day_count,
        report.year
    );

    for (day, group) in &report.entries.iter().chunk_by(|e| e.day) {
        for entry in group {
            match &entry.stats {
                Ok(stats) => println!(
                    "{CYAN}day {day:2} part {}: {}{RESET}",
                    entry.part,
                    format_stats(stats)
                ),
                Err(e) => warn(format!("day {day:2} part {}: {e}", entry.part)),
            }
        }
    }

    if !report.skipped.is_empty() {
        warn(format!(
            "Skipped days without input: {}",
            report.skipped.iter().join(", ")
        ));
    }

    let summary = report.summary();
    println!("\n{BOLD}Leaderboard:{RESET}");
    println!("Total runtime: {}", format_micros(summary.total_us));
    if let Some((day, us)) = summary.worst_day {
        println!("Worst day:    day {day} ({})", format_micros(us));
    }
    if let Some((day, us)) = summary.worst_part1 {
        println!("Worst part 1: day {day} ({})", format_micros(us));
    }
    if let Some((day, us)) = summary.worst_part2 {
        println!("Worst part 2: day {day} ({})", format_micros(us));
    }
    if let Some((day, us)) = summary.best_day {
        println!("Best day:     day {day} ({})", format_micros(us));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_below_threshold_stay_micros() {
        assert_eq!(format_micros(0.0), "0.0µs");
        assert_eq!(format_micros(999.9), "999.9µs");
    }

    #[test]
    fn micros_at_threshold_switch_to_millis() {
        assert_eq!(format_micros(1000.0), "1.00ms");
        assert_eq!(format_micros(1234567.0), "1234.57ms");
    }
}
