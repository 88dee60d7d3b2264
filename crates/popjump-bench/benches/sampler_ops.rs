//! Criterion benchmarks for sampler construction and single draws.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use popjump_core::{integrate, MarkDistribution, QuadratureConfig};
use popjump_sampling::{Density, DensitySampler, SamplerConfig};
use popjump_test_utils::seeded_rng;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_over_square_1e-5", |b| {
        b.iter(|| {
            let s = DensitySampler::over_square(
                Density::constant(1.0),
                black_box(1e-5),
                SamplerConfig::default(),
            )
            .unwrap();
            black_box(s);
        });
    });
}

fn bench_draw(c: &mut Criterion) {
    let flat = DensitySampler::new(Density::constant(1.0), SamplerConfig::default()).unwrap();
    let heavy = popjump_bench::reference_sampler().unwrap();
    let mut rng = seeded_rng(7);

    c.bench_function("draw_flat", |b| {
        b.iter(|| black_box(flat.draw(&mut rng)));
    });
    c.bench_function("draw_over_square_1e-3", |b| {
        b.iter(|| black_box(heavy.draw(&mut rng)));
    });
}

fn bench_integrate(c: &mut Criterion) {
    let config = QuadratureConfig::default();
    c.bench_function("integrate_inverse_square", |b| {
        b.iter(|| {
            let r = integrate(|x| 1.0 / (x * x), black_box(1e-5), 1.0, &[], &config);
            black_box(r.value);
        });
    });
}

criterion_group!(benches, bench_build, bench_draw, bench_integrate);
criterion_main!(benches);
