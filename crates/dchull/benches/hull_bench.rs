//! Criterion benchmarks for the divide-and-conquer hull.
//! Sizes: n in {10, 100, 1000, 10000, 100000}; uniform square and circle clouds.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dchull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dchull::api::{convex_hull, convex_hull_with, merge_hulls, Cloud, HullCfg};
use dchull::rand::DEFAULT_SEED;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform_square", n), &n, |b, &n| {
            b.iter_batched(
                || Cloud::default().sample_seeded(n, DEFAULT_SEED),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || Cloud::Circle { radius: 1.0 }.sample_seeded(n, DEFAULT_SEED + 1),
                |pts| {
                    let _hull = convex_hull_with(&pts, &HullCfg::sequential());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &m in &[10usize, 100, 1000] {
        // two circle hulls side by side: every vertex is on its hull
        let left = convex_hull(&Cloud::Circle { radius: 1.0 }.sample_seeded(m, 5));
        let right: Vec<_> = convex_hull(&Cloud::Circle { radius: 1.0 }.sample_seeded(m, 6))
            .into_iter()
            .map(|p| p + nalgebra::Vector2::new(3.0, 0.0))
            .collect();
        group.bench_with_input(BenchmarkId::new("merge_hulls", m), &m, |b, _| {
            b.iter(|| merge_hulls(&left, &right))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_merge);
criterion_main!(benches);
