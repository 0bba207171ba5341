//! Criterion benchmarks comparing direct and Strassen multiplication.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strassen_core::random::{random_matrix, seeded_rng};
use strassen_core::{
    DirectMultiplier, EngineOptions, Matrix, MatrixMultiplier, StrassenMultiplier,
    DEFAULT_SEED,
};

fn operands(n: usize) -> (Matrix<i64>, Matrix<i64>) {
    let mut rng = seeded_rng(DEFAULT_SEED);
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);
    (a, b)
}

fn bench_multipliers(c: &mut Criterion) {
    let direct = DirectMultiplier;
    let strassen = StrassenMultiplier::new(EngineOptions::default());
    let parallel = StrassenMultiplier::new(EngineOptions::default().with_parallel_threshold(256));

    let ns: Vec<usize> = vec![64, 127, 256, 513];

    let mut group = c.benchmark_group("Direct");
    for &n in &ns {
        let (a, b) = operands(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| direct.multiply(&a, &b).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Strassen");
    for &n in &ns {
        let (a, b) = operands(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| strassen.multiply(&a, &b).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("StrassenParallel");
    for &n in &ns {
        let (a, b) = operands(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| parallel.multiply(&a, &b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multipliers);
criterion_main!(benches);
