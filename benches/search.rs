use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe_ai::test_positions::{EMPTY, MID_1, OPENING_1};
use tictactoe_ai::{choose_move, Board, Difficulty, MinimaxAI, RngChooser};

fn bench_hard_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("hard_search");
    for (name, notation) in [("empty", EMPTY), ("opening_1", OPENING_1), ("mid_1", MID_1)] {
        let board = Board::from_notation(notation).unwrap();
        let player = board.side_to_move();

        group.bench_function(format!("alpha_beta/{}", name), |b| {
            b.iter(|| MinimaxAI::ALPHA_BETA.best_move(black_box(&board), player))
        });
        group.bench_function(format!("plain/{}", name), |b| {
            b.iter(|| MinimaxAI::PLAIN.best_move(black_box(&board), player))
        });
    }
    group.finish();
}

fn bench_choose_move(c: &mut Criterion) {
    let board = Board::from_notation(OPENING_1).unwrap();
    let mut chooser = RngChooser::new(Some(42));

    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        c.bench_function(&format!("choose_move/{}", difficulty), |b| {
            b.iter(|| choose_move(black_box(&board), board.side_to_move(), difficulty, &mut chooser))
        });
    }
}

criterion_group!(benches, bench_hard_search, bench_choose_move);
criterion_main!(benches);
