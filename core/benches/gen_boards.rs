use apagon_core::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn gen_boards(c: &mut Criterion) {
    let config = GameConfig::new((16, 16), 0.35).unwrap();

    c.bench_function("random_16x16", |b| {
        b.iter(|| RandomBoardGenerator::new(7).generate(config).unwrap())
    });
    c.bench_function("scramble_16x16", |b| {
        b.iter(|| ScrambleBoardGenerator::new(7, 96).generate(config).unwrap())
    });
}

criterion_group!(benches, gen_boards);
criterion_main!(benches);
