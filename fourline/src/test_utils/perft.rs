//! [Perft](https://www.chessprogramming.org/Perft) performance test:
//! count the number of game tree leaves at a given depth.

use crate::{Position, WIDTH};

/// Run the [Perft](https://www.chessprogramming.org/Perft) performance test
/// from the empty board, counting the number of game tree leaves up to `depth`.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Position::default(), depth)
}

fn leaves_below(position: Position, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let mut leaves = 0;
    for col in 0..WIDTH {
        if !position.can_play(col) {
            continue;
        }
        if position.is_winning_move(col) {
            // The game ends here
            leaves += 1;
        } else {
            leaves += leaves_below(position.play_col(col), depth - 1);
        }
    }
    leaves
}

// An alignment needs four stones from one player, so no line ends before ply
// seven and the tree is seven-ary until then.
#[test]
fn perft_1() {
    assert_eq!(run_perft(1), 7);
}

#[test]
fn perft_2() {
    assert_eq!(run_perft(2), 49);
}

#[test]
fn perft_3() {
    assert_eq!(run_perft(3), 343);
}

#[test]
fn perft_4() {
    assert_eq!(run_perft(4), 2401);
}

#[test]
fn perft_5() {
    assert_eq!(run_perft(5), 16807);
}

#[test]
fn perft_6() {
    assert_eq!(run_perft(6), 117649);
}

// At ply seven the seven single-column lines run out of room.
#[test]
fn perft_7() {
    assert_eq!(run_perft(7), 823536);
}
