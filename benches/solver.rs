use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eightpuzzle::{solve, Board, Heuristic};

fn solve_three_moves(c: &mut Criterion) {
    let start = Board::new([3, 1, 2, 4, 7, 5, 6, 0, 8]);
    let goal = Board::goal();
    c.bench_function("solve three moves", |b| {
        b.iter(|| solve(black_box(start), black_box(goal), Heuristic::Manhattan))
    });
}

fn solve_eight_moves(c: &mut Criterion) {
    let start = Board::new([3, 4, 1, 6, 0, 2, 7, 8, 5]);
    let goal = Board::goal();
    c.bench_function("solve eight moves", |b| {
        b.iter(|| solve(black_box(start), black_box(goal), Heuristic::Manhattan))
    });
}

fn solve_deeper_scramble(c: &mut Criterion) {
    let start = Board::new([6, 3, 1, 7, 4, 2, 0, 8, 5]);
    let goal = Board::goal();
    c.bench_function("solve deeper scramble", |b| {
        b.iter(|| solve(black_box(start), black_box(goal), Heuristic::Manhattan))
    });
}

fn solve_eight_moves_out_of_position(c: &mut Criterion) {
    let start = Board::new([3, 4, 1, 6, 0, 2, 7, 8, 5]);
    let goal = Board::goal();
    c.bench_function("solve eight moves out-of-position", |b| {
        b.iter(|| solve(black_box(start), black_box(goal), Heuristic::OutOfPosition))
    });
}

criterion_group!(
    benches,
    solve_three_moves,
    solve_eight_moves,
    solve_deeper_scramble,
    solve_eight_moves_out_of_position
);
criterion_main!(benches);
