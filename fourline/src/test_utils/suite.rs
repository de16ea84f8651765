//! Utilities for loading and running benchmark position suites.

use crate::Position;
use std::fs::File;
use std::io;
use std::io::prelude::*;

/// One suite entry: a position and its exact score under perfect play.
#[derive(Clone)]
pub struct SuitePosition {
    pub position: Position,
    pub moves: String,
    pub score: i8,
}

/// Load a suite file where each line holds a move string and the expected
/// score for the side to move, separated by whitespace.
pub fn load_suite_positions(path: &str) -> Vec<SuitePosition> {
    let file = File::open(path).unwrap();
    let reader = io::BufReader::new(file);

    reader
        .lines()
        .map(|line| parse_suite_position(line.unwrap()))
        .collect()
}

fn parse_suite_position(line: String) -> SuitePosition {
    let mut sections = line.split_whitespace();

    let moves = sections.next().unwrap().to_string();
    let score = sections.next().unwrap().parse().unwrap();

    SuitePosition {
        position: moves.parse().unwrap(),
        moves,
        score,
    }
}
