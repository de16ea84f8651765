//! Code for working with Connect Four positions at a medium level of abstraction.
use crate::bitboard::{self, Bitboard};
use crate::{utils, HEIGHT, NUM_CELLS, WIDTH};
use derive_more::Error;
use std::fmt;

/// The complete state of a Connect Four game, seen from the side to move.
///
/// Acts as a convenient thin wrapper for [`bitboard`] operations, at a medium
/// level of abstraction ideal for engines.
///
/// [`Position`] operations preserve the gravity and sentinel invariants, but
/// cannot check them on creation; positions already containing a completed
/// alignment are not supported, and [`Position::play`] may cause inconsistent
/// state if its contract is violated.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    /// Stones of the player to move.
    pub current: Bitboard,
    /// Stones of both players.
    pub occupied: Bitboard,
    /// Number of stones placed since the start of the game.
    pub plies: u8,
}

impl Position {
    /// Whether a stone can still be dropped into `col`.
    #[inline]
    pub fn can_play(self, col: usize) -> bool {
        (self.occupied & bitboard::top_mask(col)).is_empty()
    }

    /// Compute the position after dropping a stone into `col` for the side to move.
    ///
    /// Panics if `col` is out of range or already full; callers are expected
    /// to check [`Self::can_play`] first. The move must not complete an
    /// alignment (see [`Self::is_winning_move`]).
    #[inline]
    pub fn play_col(self, col: usize) -> Self {
        assert!(col < WIDTH, "column {} out of range", col);
        assert!(self.can_play(col), "column {} is full", col);
        self.play(Bitboard(self.occupied.0 + bitboard::bottom_mask(col).0) & bitboard::column_mask(col))
    }

    /// Compute the position after placing a stone on `cell` for the side to move.
    ///
    /// `cell` must be a single bit on the drop cell of a non-full column, and
    /// the move must not complete an alignment; otherwise the resulting
    /// position is inconsistent.
    #[inline]
    pub fn play(self, cell: Bitboard) -> Self {
        Self {
            current: self.current ^ self.occupied,
            occupied: self.occupied | cell,
            plies: self.plies + 1,
        }
    }

    /// The set of drop cells, one bit per non-full column.
    #[inline]
    pub fn possible(self) -> Bitboard {
        Bitboard(self.occupied.0 + bitboard::BOTTOM_ROW.0) & bitboard::BOARD_MASK
    }

    /// The empty cells that would complete an alignment for the side to move.
    #[inline]
    pub fn winning_cells(self) -> Bitboard {
        bitboard::winning_cells(self.current, self.occupied)
    }

    /// The empty cells that would complete an alignment for the opponent.
    #[inline]
    pub fn opponent_winning_cells(self) -> Bitboard {
        bitboard::winning_cells(self.current ^ self.occupied, self.occupied)
    }

    /// Whether the side to move can complete an alignment this ply.
    #[inline]
    pub fn can_win_next(self) -> bool {
        !(self.winning_cells() & self.possible()).is_empty()
    }

    /// Whether dropping a stone into `col` completes an alignment for the side
    /// to move. Must only be called on a playable column.
    #[inline]
    pub fn is_winning_move(self, col: usize) -> bool {
        !(self.winning_cells() & self.possible() & bitboard::column_mask(col)).is_empty()
    }

    /// The set of drop cells that do not hand the opponent an immediate win.
    ///
    /// Returns the empty mask when the opponent has two immediate threats:
    /// every reply loses on the spot. Must not be called when the side to move
    /// can win this ply; check [`Self::can_win_next`] first.
    pub fn possible_non_losing_moves(self) -> Bitboard {
        debug_assert!(!self.can_win_next());
        let possible = self.possible();
        let opponent_wins = self.opponent_winning_cells();

        let forced = possible & opponent_wins;
        let candidates = if forced.is_empty() {
            possible
        } else if forced.0 & (forced.0 - 1) != 0 {
            // Two threats cannot both be blocked.
            return Bitboard(0);
        } else {
            forced
        };

        // Dropping directly below an opponent threat opens it up next ply.
        Bitboard(candidates.0 & !(opponent_wins.0 >> 1))
    }

    /// Score a candidate move as the number of threats the side to move would
    /// hold after playing it. `cell` must be a possible drop cell.
    #[inline]
    pub fn move_score(self, cell: Bitboard) -> u32 {
        bitboard::winning_cells(self.current | cell, self.occupied).count_occupied()
    }

    /// A compact encoding identifying this position uniquely.
    ///
    /// The sum is unambiguous: the column fills are recoverable from the
    /// carries, and the current player's stones as the difference.
    #[inline]
    pub fn key(self) -> u64 {
        self.current.0 + self.occupied.0
    }

    /// The same position with columns reflected left-to-right.
    pub fn mirror(self) -> Self {
        Self {
            current: bitboard::mirror(self.current),
            occupied: bitboard::mirror(self.occupied),
            plies: self.plies,
        }
    }

    /// The lowest score this position could have: mated as late as possible.
    #[inline]
    pub fn min_score(self) -> i8 {
        -(((NUM_CELLS as u8 - self.plies) / 2) as i8)
    }

    /// The highest score this position could have: mating as early as possible.
    #[inline]
    pub fn max_score(self) -> i8 {
        ((NUM_CELLS as u8 + 1 - self.plies) / 2) as i8
    }

    /// Replay a move string: a sequence of ASCII digits `'1'..='7'`, each the
    /// 1-indexed column receiving the next stone.
    ///
    /// Replaying stops at the first invalid digit, full column, or move that
    /// would complete an alignment. Returns the position reached and the
    /// number of plies applied; the caller decides whether a short count is
    /// an error.
    pub fn replay(moves: &str) -> (Self, usize) {
        let mut position = Self::default();
        for (applied, ch) in moves.chars().enumerate() {
            let col = match ch.to_digit(10) {
                Some(digit) if (1..=WIDTH as u32).contains(&digit) => (digit - 1) as usize,
                _ => return (position, applied),
            };
            if !position.can_play(col) || position.is_winning_move(col) {
                return (position, applied);
            }
            position = position.play_col(col);
        }
        (position, moves.chars().count())
    }
}

#[derive(Debug, PartialEq, Error)]
pub struct ParseMovesError;

impl fmt::Display for ParseMovesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not parse move string; use column digits '1'..'7' describing a legal, non-winning line of play"
        )
    }
}

impl std::str::FromStr for Position {
    type Err = ParseMovesError;

    /// Parse a complete move string, requiring every move to apply.
    fn from_str(moves: &str) -> Result<Self, Self::Err> {
        let (position, applied) = Self::replay(moves);
        if applied == moves.chars().count() {
            Ok(position)
        } else {
            Err(ParseMovesError)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = if self.plies % 2 == 0 {
            (self.current, self.current ^ self.occupied)
        } else {
            (self.current ^ self.occupied, self.current)
        };

        utils::format_grid(
            (0..HEIGHT).rev().flat_map(|row| {
                (0..WIDTH).map(move |col| {
                    let cell = bitboard::bottom_mask(col).0 << row;
                    match (first.0 & cell != 0, second.0 & cell != 0) {
                        (true, false) => 'x',
                        (false, true) => 'o',
                        (false, false) => '.',
                        _ => panic!("formatting an invalid position"),
                    }
                })
            }),
            f,
        )
    }
}
