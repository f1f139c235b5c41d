//! Day 2: Cube Conundrum - which games are possible with a fixed bag

use anyhow::{Context, Result, bail};
use aoc_solver::{DayPlugin, DaySolver, RunLog};

pub struct Day02;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 2, solver: &Day02 }
}

#[derive(Debug, Default, Clone, Copy)]
struct Draw {
    red: u32,
    green: u32,
    blue: u32,
}

#[derive(Debug)]
struct Game {
    id: u32,
    draws: Vec<Draw>,
}

impl Game {
    /// Componentwise maximum over all draws: the smallest bag that could
    /// have produced this game.
    fn minimal_bag(&self) -> Draw {
        self.draws.iter().fold(Draw::default(), |acc, d| Draw {
            red: acc.red.max(d.red),
            green: acc.green.max(d.green),
            blue: acc.blue.max(d.blue),
        })
    }
}

fn parse_game(line: &str) -> Result<Game> {
    let (header, rest) = line.split_once(": ").context("missing ': ' separator")?;
    let id = header
        .strip_prefix("Game ")
        .context("missing 'Game ' prefix")?
        .parse()
        .context("bad game id")?;

    let mut draws = Vec::new();
    for chunk in rest.split("; ") {
        let mut draw = Draw::default();
        for cubes in chunk.split(", ") {
            let (count, color) = cubes.split_once(' ').context("missing cube count")?;
            let count: u32 = count.parse().context("bad cube count")?;
            match color {
                "red" => draw.red = count,
                "green" => draw.green = count,
                "blue" => draw.blue = count,
                other => bail!("unknown color {other:?}"),
            }
        }
        draws.push(draw);
    }
    Ok(Game { id, draws })
}

fn parse_games(input: &[String], log: &mut RunLog) -> Option<Vec<Game>> {
    match input.iter().map(|line| parse_game(line)).collect() {
        Ok(games) => Some(games),
        Err(e) => {
            log.note(format!("parse error: {e:#}"));
            None
        }
    }
}

impl DaySolver for Day02 {
    fn solve_part1(&self, input: &[String], log: &mut RunLog) -> Option<String> {
        let games = parse_games(input, log)?;
        let sum: u32 = games
            .iter()
            .filter(|g| {
                let bag = g.minimal_bag();
                bag.red <= 12 && bag.green <= 13 && bag.blue <= 14
            })
            .map(|g| g.id)
            .sum();
        Some(sum.to_string())
    }

    fn solve_part2(&self, input: &[String], log: &mut RunLog) -> Option<String> {
        let games = parse_games(input, log)?;
        let sum: u32 = games
            .iter()
            .map(|g| {
                let bag = g.minimal_bag();
                bag.red * bag.green * bag.blue
            })
            .sum();
        Some(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_lines;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn part1_sample() {
        let input = test_lines(SAMPLE);
        let mut log = RunLog::new();
        assert_eq!(Day02.solve_part1(&input, &mut log).as_deref(), Some("8"));
    }

    #[test]
    fn part2_sample() {
        let input = test_lines(SAMPLE);
        let mut log = RunLog::new();
        assert_eq!(Day02.solve_part2(&input, &mut log).as_deref(), Some("2286"));
    }

    #[test]
    fn malformed_input_logs_and_returns_none() {
        let input = vec!["Game x: what".to_string()];
        let mut log = RunLog::new();
        assert_eq!(Day02.solve_part1(&input, &mut log), None);
        assert!(log.lines()[0].contains("parse error"));
    }
}
