//! `fourline` is a fast, full-featured Connect Four library for engines and UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Connect Four boards.
//!    These are fast, but may result in inconsistent state if their contracts are not manually checked.
//!  - [`Position`] implements the core game logic in the same fast, unchecked way as [`bitboard`],
//!    plus checked parsing of move strings. This is suitable for use with engines.

pub mod bitboard;
pub mod test_utils;

mod position;
mod utils;

pub use position::*;

/// The number of columns on a Connect Four board.
pub const WIDTH: usize = 7;

/// The number of rows on a Connect Four board.
pub const HEIGHT: usize = 6;

/// The number of cells on a Connect Four board.
pub const NUM_CELLS: usize = WIDTH * HEIGHT;

/// The lowest score any position can have: being mated by the earliest
/// possible alignment, which still needs three of the loser's plies.
pub const MIN_SCORE: i8 = -(NUM_CELLS as i8) / 2 + 3;

/// The highest score any position can have: mating with the earliest
/// possible alignment, on the winner's fourth stone.
pub const MAX_SCORE: i8 = (NUM_CELLS as i8 + 1) / 2 - 3;
