use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

use mandelbrot_explorer::{estimate_area, estimate_area_rayon};

fn bench_estimate_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_area");

    for points in [10_000u64, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("serial", points),
            &points,
            |b, &points| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    estimate_area(black_box(256), black_box(points), &mut rng).unwrap()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rayon", points),
            &points,
            |b, &points| {
                b.iter(|| {
                    estimate_area_rayon(black_box(256), black_box(points), black_box(42)).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_estimate_area);
criterion_main!(benches);
