//! Day 16: The Floor Will Be Lava - beams bouncing through a mirror grid
//!
//! Part 2 tries every edge entry point; the simulations are independent, so
//! they fan out across a rayon pool. The runner never sees this parallelism;
//! to it the part is one blocking call.

use aoc_solver::{DayPlugin, DaySolver, RunLog};
use rayon::prelude::*;

pub struct Day16;

aoc_solver::inventory::submit! {
    DayPlugin { year: 2023, day: 16, solver: &Day16 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Up => y.checked_sub(1).map(|y| (x, y)),
            Direction::Down => (y + 1 < height).then_some((x, y + 1)),
            Direction::Left => x.checked_sub(1).map(|x| (x, y)),
            Direction::Right => (x + 1 < width).then_some((x + 1, y)),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

struct Grid {
    tiles: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    fn parse(input: &[String]) -> Option<Self> {
        let height = input.len();
        let width = input.first()?.len();
        if input.iter().any(|line| line.len() != width) {
            return None;
        }
        let tiles = input.iter().flat_map(|line| line.bytes()).collect();
        Some(Self {
            tiles,
            width,
            height,
        })
    }

    fn at(&self, x: usize, y: usize) -> u8 {
        self.tiles[y * self.width + x]
    }

    /// Tiles energized by a beam entering at (x, y) heading `dir`.
    fn energized_from(&self, x: usize, y: usize, dir: Direction) -> usize {
        // Per-tile visited set, one bit per direction, kills beam loops
        let mut seen = vec![0u8; self.tiles.len()];
        let mut beams = vec![(x, y, dir)];

        while let Some((x, y, dir)) = beams.pop() {
            let bit = 1 << dir.index();
            let cell = &mut seen[y * self.width + x];
            if *cell & bit != 0 {
                continue;
            }
            *cell |= bit;

            let outgoing: &[Direction] = match (self.at(x, y), dir) {
                (b'/', Direction::Right) => &[Direction::Up],
                (b'/', Direction::Left) => &[Direction::Down],
                (b'/', Direction::Up) => &[Direction::Right],
                (b'/', Direction::Down) => &[Direction::Left],
                (b'\\', Direction::Right) => &[Direction::Down],
                (b'\\', Direction::Left) => &[Direction::Up],
                (b'\\', Direction::Up) => &[Direction::Left],
                (b'\\', Direction::Down) => &[Direction::Right],
                (b'|', Direction::Left | Direction::Right) => {
                    &[Direction::Up, Direction::Down]
                }
                (b'-', Direction::Up | Direction::Down) => {
                    &[Direction::Left, Direction::Right]
                }
                (_, dir) => match dir {
                    Direction::Up => &[Direction::Up],
                    Direction::Right => &[Direction::Right],
                    Direction::Down => &[Direction::Down],
                    Direction::Left => &[Direction::Left],
                },
            };

            for &out in outgoing {
                if let Some((nx, ny)) = out.step(x, y, self.width, self.height) {
                    beams.push((nx, ny, out));
                }
            }
        }

        seen.iter().filter(|&&cell| cell != 0).count()
    }

    /// All edge entry points with their inward direction
    fn entry_points(&self) -> Vec<(usize, usize, Direction)> {
        let mut starts = Vec::new();
        for x in 0..self.width {
            starts.push((x, 0, Direction::Down));
            starts.push((x, self.height - 1, Direction::Up));
        }
        for y in 0..self.height {
            starts.push((0, y, Direction::Right));
            starts.push((self.width - 1, y, Direction::Left));
        }
        starts
    }
}

impl DaySolver for Day16 {
    fn solve_part1(&self, input: &[String], _log: &mut RunLog) -> Option<String> {
        let grid = Grid::parse(input)?;
        Some(grid.energized_from(0, 0, Direction::Right).to_string())
    }

    fn solve_part2(&self, input: &[String], log: &mut RunLog) -> Option<String> {
        let grid = Grid::parse(input)?;
        let starts = grid.entry_points();
        log.note(format!("trying {} entry points", starts.len()));
        let best = starts
            .into_par_iter()
            .map(|(x, y, dir)| grid.energized_from(x, y, dir))
            .max()?;
        Some(best.to_string())
    }
}
