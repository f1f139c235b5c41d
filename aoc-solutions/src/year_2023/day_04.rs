//! Day 4: Scratchcards - winning-number matches and cascading copies

use aoc_solver::{DayPlugin, DaySolver, RunLog};
use std::collections::HashSet;

pub struct Day04;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 4, solver: &Day04 }
}

/// Number of winning matches per card, in card order.
fn matches_per_card(input: &[String]) -> Option<Vec<usize>> {
    input
        .iter()
        .map(|line| {
            let (_, numbers) = line.split_once(": ")?;
            let (winning, have) = numbers.split_once(" | ")?;
            let winning: HashSet<u32> = winning
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()
                .ok()?;
            Some(
                have.split_whitespace()
                    .filter_map(|n| n.parse::<u32>().ok())
                    .filter(|n| winning.contains(n))
                    .count(),
            )
        })
        .collect()
}

impl DaySolver for Day04 {
    fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let score: u32 = matches_per_card(input)?
            .into_iter()
            .filter(|&m| m > 0)
            .map(|m| 1 << (m - 1))
            .sum();
        Some(score.to_string())
    }

    fn solve_part2(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let matches = matches_per_card(input)?;
        let mut copies = vec![1u64; matches.len()];
        for (i, m) in matches.iter().enumerate() {
            for j in i + 1..(i + 1 + m).min(copies.len()) {
                copies[j] += copies[i];
            }
        }
        Some(copies.iter().sum::<u64>().to_string())
    }

    fn misc(&self, input: &[String], log: &mut RunLog) {
        // Histogram of matches per card, handy for eyeballing the cascade
        if let Some(matches) = matches_per_card(input) {
            for (i, m) in matches.iter().enumerate() {
                log.note(format!("card {:3}: {}", i + 1, "#".repeat(*m)));
            }
        }
    }
}
