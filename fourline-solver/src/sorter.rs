//! A small insertion-sorted buffer for move ordering.

use arrayvec::ArrayVec;
use fourline::bitboard::Bitboard;
use fourline::WIDTH;

/// Holds up to one candidate move per column, ordered by heuristic score.
///
/// The buffer is kept ascending so that iteration pops the best move first;
/// moves with equal scores come out in insertion order.
#[derive(Default)]
pub struct MoveSorter {
    entries: ArrayVec<Entry, WIDTH>,
}

struct Entry {
    cell: Bitboard,
    score: u32,
}

impl MoveSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate move with its heuristic score.
    pub fn add(&mut self, cell: Bitboard, score: u32) {
        let at = self.entries.partition_point(|entry| entry.score < score);
        self.entries.insert(at, Entry { cell, score });
    }
}

/// Pops the remaining moves, best first.
impl Iterator for MoveSorter {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Bitboard> {
        self.entries.pop().map(|entry| entry.cell)
    }
}
