//! Criterion benchmarks for full forward and backward passes on the
//! reference model.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use popjump_bench::{reference_config, reference_model};
use popjump_engine::{Coalescent, Simulation};
use popjump_test_utils::seeded_rng;

fn bench_realisation(c: &mut Criterion) {
    let model = reference_model().unwrap();
    let mut rng = seeded_rng(42);

    c.bench_function("ppp_sample_t1", |b| {
        b.iter(|| {
            let real = model.process().sample(1.0, &mut rng);
            black_box(real);
        });
    });
}

fn bench_simulation(c: &mut Criterion) {
    let model = reference_model().unwrap();
    let config = reference_config();
    let mut rng = seeded_rng(42);

    c.bench_function("simulation_t1_dt1e-3", |b| {
        b.iter(|| {
            let sim = Simulation::run(model.clone(), config, &mut rng).unwrap();
            black_box(sim);
        });
    });
}

fn bench_coalescent(c: &mut Criterion) {
    let mut rng = seeded_rng(42);
    let sim = Simulation::run(reference_model().unwrap(), reference_config(), &mut rng).unwrap();

    c.bench_function("coalescent_n1000", |b| {
        b.iter(|| {
            let coal = Coalescent::new(&sim, 1000, &mut rng).unwrap();
            black_box(coal);
        });
    });
}

criterion_group!(benches, bench_realisation, bench_simulation, bench_coalescent);
criterion_main!(benches);
