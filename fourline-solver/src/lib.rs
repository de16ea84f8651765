//! Exact game-theoretic solving for Connect Four positions.
//!
//! The solver runs a fail-soft negamax with alpha-beta pruning over the
//! bitboard primitives from [`fourline`], narrowing a null window around the
//! score until it is pinned exactly. Scores follow the mate-distance
//! convention of [`fourline::Position::max_score`]: positive means the side
//! to move wins, with faster wins scoring higher.

pub mod search;

mod sorter;
mod table;

pub use search::Solver;
pub use table::TranspositionTable;

use fourline::Position;

/// Solve the position, trying to determine the exact score.
/// Takes longer, but also tells how quickly the outcome can be forced.
pub fn solve_exact(position: Position) -> i8 {
    Solver::new().solve(position)
}

/// Solve the position, caring only about win, loss, or draw.
/// Faster, but provides less information.
pub fn solve_win_loss_draw(position: Position) -> i8 {
    Solver::new().solve_narrowed(position, -1, 1).signum()
}
