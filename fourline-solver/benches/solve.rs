use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use fourline::bitboard::{self, Bitboard};
use fourline::{Position, WIDTH};
use fourline_solver::{Solver, TranspositionTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest prime below 2^20: keeps the per-iteration table setup cheap while
/// staying collision-light at these depths.
const TABLE_ENTRIES: usize = 1_048_573;

/// Play up to `depth` random quiet plies from the empty board.
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

fn criterion_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    for depth in [26, 30, 34] {
        let positions: Vec<Position> = (0..8).map(|seed| quiet_position(seed, depth)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            &positions,
            |b, positions| {
                b.iter(|| {
                    let mut solver =
                        Solver::with_table(TranspositionTable::with_entries(TABLE_ENTRIES));
                    positions
                        .iter()
                        .map(|&position| solver.solve(black_box(position)) as i64)
                        .sum::<i64>()
                })
            },
        );
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = solve;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_solve
}

#[cfg(not(unix))]
criterion_group! {
    name = solve;
    config = Criterion::default();
    targets = criterion_solve
}

criterion_main!(solve);
