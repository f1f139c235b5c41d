//! Day 6: Wait For It - count button-hold times that beat the record

use aoc_solver::{DayPlugin, DaySolver, RunLog};

pub struct Day06;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 6, solver: &Day06 }
}

/// Holding for t of T milliseconds travels t * (T - t); count the integer t
/// with distance strictly beyond the record. Roots of t^2 - T t + record = 0
/// bound the winning interval; the float estimate is refined at the edges to
/// dodge rounding.
fn ways_to_beat(time: u64, record: u64) -> u64 {
    let t = time as f64;
    let r = record as f64;
    let disc = t * t - 4.0 * r;
    if disc <= 0.0 {
        return 0;
    }
    let mut lo = ((t - disc.sqrt()) / 2.0).floor() as u64;
    let mut hi = (((t + disc.sqrt()) / 2.0).ceil() as u64).min(time);

    while lo * (time - lo) <= record {
        lo += 1;
    }
    while hi * (time - hi) <= record {
        hi -= 1;
    }
    hi - lo + 1
}

fn numbers(line: &str) -> Vec<u64> {
    line.split_whitespace()
        .filter_map(|n| n.parse().ok())
        .collect()
}

fn kerned_number(line: &str) -> Option<u64> {
    line.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()
}

impl DaySolver for Day06 {
    fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let times = numbers(input.first()?);
        let records = numbers(input.get(1)?);
        if times.is_empty() || times.len() != records.len() {
            return None;
        }
        let product: u64 = times
            .iter()
            .zip(&records)
            .map(|(&t, &r)| ways_to_beat(t, r))
            .product();
        Some(product.to_string())
    }

    fn solve_part2(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let time = kerned_number(input.first()?)?;
        let record = kerned_number(input.get(1)?)?;
        Some(ways_to_beat(time, record).to_string())
    }
}
