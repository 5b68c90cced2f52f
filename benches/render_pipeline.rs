use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use mandelbrot_explorer::{
    generate_fractal, generate_fractal_rayon, generate_pixel_buffer, BandedPalette,
    MandelbrotAlgorithm, MandelbrotConfig, PixelGrid,
};

fn bench_generate_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_fractal");

    for (width, height) in [(200, 150), (400, 300)] {
        let grid = PixelGrid::new(width, height).unwrap();
        let config = MandelbrotConfig::with_default_region(grid, 256).unwrap();
        let algorithm =
            MandelbrotAlgorithm::new(config.grid(), config.region(), config.max_iterations())
                .unwrap();
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("serial", &label), &grid, |b, &grid| {
            b.iter(|| generate_fractal(black_box(grid), &algorithm).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("rayon", &label), &grid, |b, &grid| {
            b.iter(|| generate_fractal_rayon(black_box(grid), &algorithm).unwrap());
        });
    }

    group.finish();
}

fn bench_colour_mapping(c: &mut Criterion) {
    let grid = PixelGrid::new(400, 300).unwrap();
    let config = MandelbrotConfig::with_default_region(grid, 256).unwrap();
    let algorithm =
        MandelbrotAlgorithm::new(config.grid(), config.region(), config.max_iterations()).unwrap();
    let fractal = generate_fractal_rayon(grid, &algorithm).unwrap();
    let colour_map = BandedPalette::new(config.max_iterations());

    c.bench_function("generate_pixel_buffer 400x300", |b| {
        b.iter(|| {
            generate_pixel_buffer(black_box(fractal.clone()), &colour_map, grid).unwrap()
        });
    });
}

criterion_group!(benches, bench_generate_fractal, bench_colour_mapping);
criterion_main!(benches);
