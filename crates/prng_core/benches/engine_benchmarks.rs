//! Criterion benchmarks for the generator engines.
//!
//! Compares per-draw cost of every algorithm through static dispatch on the
//! concrete engine and through the `Generator` enum.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prng_core::engines::{Mrg, Ranf, Taus, Uni, Uni32};
use prng_core::{Generator, GeneratorKind, RandomEngine, SampleRng};

const DRAWS: u64 = 10_000;

fn bench_draws<E: RandomEngine>(rng: &mut E) -> f64 {
    let mut acc = 0.0;
    for _ in 0..DRAWS {
        acc += rng.next_double();
    }
    acc
}

/// Benchmark `next_double` on each concrete engine.
fn bench_concrete_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("concrete_next_double");
    group.throughput(Throughput::Elements(DRAWS));

    group.bench_function("ranf", |b| {
        let mut rng = Ranf::seeded(1);
        b.iter(|| black_box(bench_draws(&mut rng)));
    });
    group.bench_function("mrg", |b| {
        let mut rng = Mrg::seeded(1);
        b.iter(|| black_box(bench_draws(&mut rng)));
    });
    group.bench_function("uni", |b| {
        let mut rng = Uni::seeded(1);
        b.iter(|| black_box(bench_draws(&mut rng)));
    });
    group.bench_function("uni32", |b| {
        let mut rng = Uni32::seeded(1);
        b.iter(|| black_box(bench_draws(&mut rng)));
    });
    group.bench_function("taus", |b| {
        let mut rng = Taus::seeded(1);
        b.iter(|| black_box(bench_draws(&mut rng)));
    });

    group.finish();
}

/// Benchmark `next_double` through the dispatch enum.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_next_double");
    group.throughput(Throughput::Elements(DRAWS));

    for kind in GeneratorKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut rng = Generator::new(kind, 1);
            b.iter(|| black_box(bench_draws(&mut rng)));
        });
    }

    group.finish();
}

/// Benchmark batch normal generation through the `rand_distr` bridge.
fn bench_fill_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_normal");

    for size in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("taus", size), &size, |b, &size| {
            let mut rng = SampleRng::<Taus>::from_seed(1);
            let mut buffer = vec![0.0; size];
            b.iter(|| {
                rng.fill_normal(&mut buffer);
                black_box(buffer[0])
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_concrete_engines, bench_dispatch, bench_fill_normal);
criterion_main!(benches);
