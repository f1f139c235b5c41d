//! Solutions for Advent of Code 2023

pub mod day_01;
pub mod day_02;
pub mod day_04;
pub mod day_06;
pub mod day_09;
pub mod day_16;
