//! The random source abstraction consumed by the sampling and simulation code.
//!
//! [`RandomSource`] is an extension trait over [`RngCore`]: any seeded
//! generator (e.g. `ChaCha8Rng`) is a random source. Every method draws
//! from the generator exactly in call order, so a fixed seed reproduces a
//! whole simulation.

use rand::{Rng, RngCore};
use rand_distr::{Binomial, Distribution, Poisson};

/// Uniform, Poisson and Binomial draws on top of any [`RngCore`].
pub trait RandomSource: RngCore {
    /// Uniform draw on `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    /// Uniform draw on `[low, high)`. Returns `low` when the interval is empty.
    fn uniform_in(&mut self, low: f64, high: f64) -> f64 {
        let u = self.uniform();
        if high > low {
            low + (high - low) * u
        } else {
            low
        }
    }

    /// Poisson draw with mean `lambda`. Non-positive or NaN means give 0.
    fn poisson(&mut self, lambda: f64) -> u64 {
        match Poisson::new(lambda) {
            // Rust clamps float-to-int casts, so huge means saturate.
            Ok(law) => law.sample(self) as u64,
            Err(_) => 0,
        }
    }

    /// Binomial draw of `n` trials with success probability `p`.
    ///
    /// `p` is clamped into `[0, 1]`; NaN counts as 0.
    fn binomial(&mut self, n: u64, p: f64) -> u64 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        match Binomial::new(n, p) {
            Ok(law) => law.sample(self),
            Err(_) => 0,
        }
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {}
