//! Test utilities for popjump development.
//!
//! Provides a seeded generator ([`seeded_rng`]) and a handful of
//! ready-made models in [`fixtures`] so that tests across crates draw
//! from the same small set of configurations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::{
    dirac_marks, over_square_model, over_square_sampler, static_model, uniform_marks,
    uniform_model,
};

/// Deterministic generator for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample mean and unbiased sample variance.
///
/// Returns `(NaN, NaN)` for an empty slice and a zero variance for a
/// single value.
pub fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() == 1 {
        return (mean, 0.0);
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (mean, ss / (n - 1.0))
}
