//! Benchmarks for move generation, evaluation and puzzle synthesis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use puzzlegen::board::Position;
use puzzlegen::cache::Cache;
use puzzlegen::puzzle::{generate_puzzle, SilentProgress};
use puzzlegen::search::{evaluate, MATE};

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves().len()))
    });

    let mut middlegame = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4",
    );
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves().len()))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.sample_size(10);

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut pos = Position::new();
                let mut cache = Cache::new();
                evaluate(&mut pos, black_box(depth), &mut cache, -MATE, MATE)
            })
        });
    }

    group.finish();
}

fn bench_generate_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_puzzle");
    group.sample_size(10);

    group.bench_function("mate_in_two", |b| {
        b.iter(|| {
            let mut cache = Cache::new();
            let mut rng = StdRng::seed_from_u64(0);
            generate_puzzle(
                &mut cache,
                2,
                black_box("bench_0"),
                &mut rng,
                &mut SilentProgress,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_evaluate, bench_generate_puzzle);
criterion_main!(benches);
