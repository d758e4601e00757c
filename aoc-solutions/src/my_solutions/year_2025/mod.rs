//! Advent of Code 2025

pub mod day_4;
pub mod day_5;
