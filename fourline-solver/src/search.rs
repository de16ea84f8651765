//! Internal search functions.

use crate::sorter::MoveSorter;
use crate::table::TranspositionTable;
use fourline::{bitboard, Position, MIN_SCORE, NUM_CELLS, WIDTH};

/// Static column exploration order, centre out: centre columns take part in
/// the most alignments, so trying them first tightens alpha fastest.
const EXPLORE_ORDER: [usize; WIDTH] = [3, 2, 4, 1, 5, 0, 6];

/// An exact Connect Four solver: fail-soft negamax with alpha-beta pruning,
/// a transposition table, and threat-based move ordering, driven by
/// null-window iterative narrowing.
pub struct Solver {
    table: TranspositionTable,
    nodes: u64,
}

impl Solver {
    /// Construct a solver with the default transposition table.
    pub fn new() -> Self {
        Self::with_table(TranspositionTable::new())
    }

    /// Construct a solver reusing `table`, so callers control caching
    /// behaviour across runs.
    pub fn with_table(table: TranspositionTable) -> Self {
        Self { table, nodes: 0 }
    }

    /// The number of search nodes visited since construction or [`Self::reset`].
    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Clear the transposition table and the node counter.
    pub fn reset(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }

    /// Compute the exact score of `position` under perfect play by both sides.
    ///
    /// `position` must not already contain an alignment.
    pub fn solve(&mut self, position: Position) -> i8 {
        self.solve_narrowed(position, position.min_score(), position.max_score())
    }

    /// Compute the score of `position`, clamped into the window `[lo, hi]`.
    ///
    /// Repeatedly probes the search with a null window until the interval
    /// collapses. Probes are biased toward the half of the range nearer zero,
    /// which converges faster on typical score distributions than plain
    /// bisection.
    pub fn solve_narrowed(&mut self, position: Position, mut lo: i8, mut hi: i8) -> i8 {
        if position.can_win_next() {
            return position.max_score();
        }

        while lo < hi {
            let mut mid = lo + (hi - lo) / 2;
            if mid <= 0 && lo / 2 < mid {
                mid = lo / 2;
            } else if mid >= 0 && hi / 2 > mid {
                mid = hi / 2;
            }

            // One null-window probe: is the score above or below mid?
            let result = self.negamax(position, mid, mid + 1);
            if result <= mid {
                hi = result;
            } else {
                lo = result;
            }
        }
        lo
    }

    /// Fail-soft alpha-beta negamax over the non-losing moves of `position`.
    ///
    /// Requires `alpha < beta` and a side to move without an immediate win.
    /// The result is an upper bound on the true score when it is at most the
    /// given `alpha`, a lower bound when it is at least `beta`, and exact
    /// otherwise.
    fn negamax(&mut self, position: Position, mut alpha: i8, mut beta: i8) -> i8 {
        debug_assert!(alpha < beta);
        debug_assert!(!position.can_win_next());
        self.nodes += 1;

        let non_losing = position.possible_non_losing_moves();
        if non_losing.is_empty() {
            // The opponent wins next ply no matter what.
            return -(((NUM_CELLS as u8 - position.plies) / 2) as i8);
        }

        if position.plies as usize >= NUM_CELLS - 2 {
            // Two plies left and neither side can align: drawn.
            return 0;
        }

        // The deepest possible loss from here bounds the score from below.
        let lower = -(((NUM_CELLS as u8 - 2 - position.plies) / 2) as i8);
        if alpha < lower {
            alpha = lower;
            if alpha >= beta {
                return alpha;
            }
        }

        // The fastest win still available bounds the score from above; a
        // cached bound from an earlier probe may tighten it further.
        let mut upper = ((NUM_CELLS as u8 - 1 - position.plies) / 2) as i8;
        let cached = self.table.get(position.key());
        if cached != 0 {
            upper = cached as i8 + MIN_SCORE - 1;
        }
        if beta > upper {
            beta = upper;
            if alpha >= beta {
                return beta;
            }
        }

        let mut moves = MoveSorter::new();
        for col in EXPLORE_ORDER {
            let cell = non_losing & bitboard::column_mask(col);
            if !cell.is_empty() {
                moves.add(cell, position.move_score(cell));
            }
        }

        for cell in moves {
            let score = -self.negamax(position.play(cell), -beta, -alpha);

            // Fail high: the opponent won't allow a line this good.
            if score >= beta {
                return score;
            }

            if score > alpha {
                alpha = score;
            }
        }

        // Everything failed low: alpha is a proven upper bound here.
        self.table.put(position.key(), (alpha - MIN_SCORE + 1) as u8);
        alpha
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
