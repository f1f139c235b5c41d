//! Day 9: Mirage Maintenance - extrapolate sequences via difference triangles

use aoc_solver::{DayPlugin, DaySolver, RunLog};

pub struct Day09;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 9, solver: &Day09 }
}

/// Next value of the sequence: sum of the last element of every difference
/// row down to the all-zero row.
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&diffs)
}

fn parse(input: &[String]) -> Option<Vec<Vec<i64>>> {
    input
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|n| n.parse().ok())
                .collect::<Option<Vec<i64>>>()
        })
        .collect()
}

impl DaySolver for Day09 {
    fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let sum: i64 = parse(input)?.iter().map(|seq| extrapolate(seq)).sum();
        Some(sum.to_string())
    }

    fn solve_part2(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        // Extrapolating backwards is extrapolating the reversed sequence
        let sum: i64 = parse(input)?
            .iter()
            .map(|seq| {
                let reversed: Vec<i64> = seq.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Some(sum.to_string())
    }
}
