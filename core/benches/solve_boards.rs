use apagon_core::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn solve_boards(c: &mut Criterion) {
    let config = GameConfig::new((16, 16), 0.0).unwrap();
    let board = ScrambleBoardGenerator::new(11, 96).generate(config).unwrap();

    c.bench_function("solve_16x16", |b| b.iter(|| solve(black_box(&board))));
}

criterion_group!(benches, solve_boards);
criterion_main!(benches);
