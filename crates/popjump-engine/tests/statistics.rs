//! Distributional checks on the jump process and the sampler-driven model.

use popjump_core::MarkDistribution;
use popjump_engine::{Drift, PoissonPointProcess, Simulation, SimulationConfig};
use popjump_test_utils::{mean_and_variance, over_square_sampler, seeded_rng, uniform_marks};

#[test]
fn event_count_matches_rate_times_horizon() {
    let ppp = PoissonPointProcess::new(50.0, uniform_marks()).unwrap();
    let mut rng = seeded_rng(1);
    let counts: Vec<f64> = (0..2000)
        .map(|_| ppp.sample(2.0, &mut rng).len() as f64)
        .collect();
    let (mean, var) = mean_and_variance(&counts);
    assert!((mean - 100.0).abs() < 1.5, "mean count {mean}");
    assert!((var - 100.0).abs() < 15.0, "count variance {var}");
    assert_eq!(ppp.expected_count(2.0), 100.0);
}

#[test]
fn event_times_are_uniform_on_the_horizon() {
    let ppp = PoissonPointProcess::new(50.0, uniform_marks()).unwrap();
    let mut rng = seeded_rng(2);
    let mut times = Vec::new();
    let mut births = Vec::new();
    for _ in 0..1000 {
        let real = ppp.sample(2.0, &mut rng);
        times.extend_from_slice(real.times());
        births.extend(real.marks().iter().map(|m| m.birth));
    }
    let (mean_t, var_t) = mean_and_variance(&times);
    assert!((mean_t - 1.0).abs() < 0.02, "mean time {mean_t}");
    assert!((var_t - 4.0 / 12.0).abs() < 0.01, "time variance {var_t}");

    let (mean_b, _) = mean_and_variance(&births);
    assert!((mean_b - 0.5).abs() < 0.01, "mean mark {mean_b}");
}

#[test]
fn over_square_marks_respect_cutoff_and_domain() {
    let sampler = over_square_sampler(1e-3);
    let mut rng = seeded_rng(3);
    for _ in 0..2000 {
        let z = sampler.draw(&mut rng);
        assert!((1e-3..1.0).contains(&z), "draw {z} outside [cutoff, 1)");
    }
}

#[test]
fn over_square_rate_follows_the_integral() {
    let ppp = PoissonPointProcess::from_sampler(over_square_sampler(1e-2));
    // ∫_{0.01}^{1} x⁻² dx = 99.
    assert!((ppp.rate() - 99.0).abs() < 1e-4, "rate {}", ppp.rate());
}

#[test]
fn equilibrium_is_reached_without_jumps() {
    let model = popjump_test_utils::uniform_model(Drift::new(2.0, 3.0), 1e-9).unwrap();
    let config = SimulationConfig {
        horizon: 20.0,
        dt: 0.5,
        initial_size: 0.0,
    };
    let sim = Simulation::run(model, config, &mut seeded_rng(4)).unwrap();
    assert!(sim.realisation().is_empty());
    assert!((sim.final_size() - 1.5).abs() < 1e-12);
}
