//! End-to-end solving tests on provable and randomly generated positions.

use fourline::bitboard::{self, Bitboard};
use fourline::{Position, WIDTH};
use fourline_solver::{solve_win_loss_draw, Solver, TranspositionTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A solver sized for test workloads.
fn test_solver() -> Solver {
    Solver::with_table(TranspositionTable::with_entries(131_071))
}

/// Play up to `depth` random quiet plies from the empty board: never a
/// winning move, and never one that hands the opponent an immediate win.
fn quiet_position(seed: u64, depth: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::default();

    for _ in 0..depth {
        if position.can_win_next() {
            break;
        }
        let moves = position.possible_non_losing_moves();
        let cells: Vec<Bitboard> = (0..WIDTH)
            .map(|col| moves & bitboard::column_mask(col))
            .filter(|cell| !cell.is_empty())
            .collect();
        if cells.is_empty() {
            break;
        }
        position = position.play(cells[rng.gen_range(0..cells.len())]);
    }
    position
}

/// The best achievable score over every legal move of `position`.
fn best_over_children(solver: &mut Solver, position: Position) -> i8 {
    (0..WIDTH)
        .filter(|&col| position.can_play(col))
        .map(|col| {
            if position.is_winning_move(col) {
                position.max_score()
            } else {
                -solver.solve(position.play_col(col))
            }
        })
        .max()
        .expect("position has no legal moves")
}

#[test]
fn solves_an_immediate_win() {
    let position: Position = "121212".parse().unwrap();
    assert_eq!(test_solver().solve(position), 18);
}

#[test]
fn solves_an_unstoppable_double_threat() {
    let position: Position = "44335".parse().unwrap();
    assert_eq!(test_solver().solve(position), -18);
}

#[test]
fn scores_stay_within_position_bounds() {
    let mut solver = test_solver();
    for seed in 0..6 {
        let position = quiet_position(seed, 26);
        let score = solver.solve(position);
        assert!(score >= position.min_score(), "score {} for seed {}", score, seed);
        assert!(score <= position.max_score(), "score {} for seed {}", score, seed);
    }
}

#[test]
fn solve_is_mirror_symmetric() {
    for (seed, depth) in [(1, 24), (2, 26), (3, 30), (4, 34)] {
        let position = quiet_position(seed, depth);
        let score = test_solver().solve(position);
        let mirrored = test_solver().solve(position.mirror());
        assert_eq!(score, mirrored, "seed {} depth {}", seed, depth);
    }
}

#[test]
fn solve_equals_best_over_children() {
    // The defining negamax relation, checked against independent solves of
    // every child through a shared (warm) table.
    let mut solver = test_solver();
    for (seed, depth) in [(5, 26), (6, 30)] {
        let position = quiet_position(seed, depth);
        let score = solver.solve(position);
        assert_eq!(score, best_over_children(&mut solver, position), "seed {}", seed);
    }
}

#[test]
fn forced_block_negates_across_the_ply() {
    // Two safely filled edge columns, then a three-in-a-row with one end
    // already blocked: the side to move has exactly one non-losing reply.
    let position: Position = "11771177117732425".parse().unwrap();
    assert_eq!(position.possible_non_losing_moves(), bitboard::bottom_mask(5));

    let mut solver = test_solver();
    assert_eq!(solver.solve(position), -solver.solve(position.play_col(5)));
}

#[test]
fn warm_table_reproduces_the_score() {
    let mut solver = test_solver();
    let position = quiet_position(8, 24);
    let cold = solver.solve(position);
    let warm = solver.solve(position);
    assert_eq!(cold, warm);
}

#[test]
fn weak_solve_agrees_with_exact_solve() {
    let mut solver = test_solver();
    for seed in 10..14 {
        let position = quiet_position(seed, 28);
        let exact = solver.solve(position);
        assert_eq!(solve_win_loss_draw(position), exact.signum(), "seed {}", seed);
    }
}

// Takes minutes - run manually with: cargo test --release -- --ignored
#[test]
#[ignore]
fn first_player_wins_the_empty_board() {
    let score = Solver::new().solve(Position::default());
    assert_eq!(score, 1);
}

// Takes minutes - run manually with: cargo test --release -- --ignored
#[test]
#[ignore]
fn centre_opening_loses_for_the_second_player() {
    let position: Position = "4".parse().unwrap();
    assert_eq!(Solver::new().solve(position), -1);
}
