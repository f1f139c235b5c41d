//! Day 1: Trebuchet?! - recover calibration values from amended lines

use aoc_solver::{DayPlugin, DaySolver, RunLog};

pub struct Day01;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 1, solver: &Day01 }
}

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Digits at every offset of the line, optionally including spelled-out
/// words. Words may overlap ("eightwo"), so the scan never consumes them.
fn digits(line: &str, with_words: bool) -> Vec<u32> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    for i in 0..bytes.len() {
        if bytes[i].is_ascii_digit() {
            found.push((bytes[i] - b'0') as u32);
            continue;
        }
        if with_words {
            for (word, value) in SPELLED {
                if line[i..].starts_with(word) {
                    found.push(value);
                    break;
                }
            }
        }
    }
    found
}

fn calibration_sum(input: &[String], with_words: bool) -> Option<String> {
    let mut sum = 0u32;
    for line in input {
        let found = digits(line, with_words);
        sum += found.first()? * 10 + found.last()?;
    }
    Some(sum.to_string())
}

impl DaySolver for Day01 {
    fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        calibration_sum(input, false)
    }

    fn solve_part2(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        calibration_sum(input, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_lines;

    #[test]
    fn part1_sample() {
        let input = test_lines(
            "1abc2\n\
             pqr3stu8vwx\n\
             a1b2c3d4e5f\n\
             treb7uchet",
        );
        let mut log = RunLog::new();
        assert_eq!(Day01.solve_part1(&input, &mut log).as_deref(), Some("142"));
    }

    #[test]
    fn part2_sample() {
        let input = test_lines(
            "two1nine\n\
             eightwothree\n\
             abcone2threexyz\n\
             xtwone3four\n\
             4nineeightseven2\n\
             zoneight234\n\
             7pqrstsixteen",
        );
        let mut log = RunLog::new();
        assert_eq!(Day01.solve_part2(&input, &mut log).as_deref(), Some("281"));
    }

    #[test]
    fn overlapping_words_both_count() {
        assert_eq!(digits("eightwo", true), vec![8, 2]);
    }

    #[test]
    fn line_without_digits_yields_no_answer() {
        let input = vec!["nodigitshere".to_string()];
        let mut log = RunLog::new();
        assert_eq!(Day01.solve_part1(&input, &mut log), None);
    }
}
