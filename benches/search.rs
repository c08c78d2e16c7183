use criterion::{criterion_group, criterion_main, Criterion};
use four_row::board::{Board, Player, Pos};
use four_row::config::OpponentConfig;
use four_row::eval::evaluate;
use four_row::search::Searcher;
use four_row::{AIEngine, Difficulty};
use std::hint::black_box;

/// A handful of quiet positions from an opening
fn corpus() -> Vec<Board> {
    let moves = [(2, 2), (3, 3), (2, 3), (3, 2), (1, 1), (4, 4), (1, 4), (4, 1)];
    let mut boards = vec![Board::new()];
    let mut board = Board::new();
    let mut player = Player::X;
    for (r, c) in moves {
        board.place_stone(Pos::new(r, c), player);
        boards.push(board);
        player = player.opponent();
    }
    boards
}

fn bench_evaluate(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("eval/evaluate", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for board in &boards {
                acc += i64::from(evaluate(black_box(board), Player::X));
            }
            black_box(acc)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let boards = corpus();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("alphabeta/depth4/opening", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(4);
            black_box(searcher.search(black_box(&boards[2]), Player::X))
        })
    });
    group.bench_function("alphabeta/depth4/midgame", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(4);
            black_box(searcher.search(black_box(&boards[8]), Player::X))
        })
    });
    group.bench_function("engine/medium", |b| {
        let mut engine = AIEngine::with_seed(1337, OpponentConfig::default());
        b.iter(|| black_box(engine.choose_move(black_box(&boards[4]), Player::X, Difficulty::Medium)))
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
