//! Slice sampling from an unnormalized density on a bounded interval.
//!
//! A draw starts at the sampler's `x0` and runs up to `iterations` outer
//! steps. Each step picks a height `u = f(x) * U(0,1)` under the density
//! at the current point, then proposes uniformly inside a bracket that
//! starts as the whole domain. A proposal with `f(v) > u` is accepted;
//! otherwise the bracket is shrunk on the side of `v` relative to `x`.
//!
//! When the bracket becomes narrower than `atol` the draw ends at once
//! and returns the current point, even with outer steps left. This is a
//! soft convergence exit, not an error.

use log::{debug, trace};
use popjump_core::{
    integrate, DomainError, MarkDistribution, RandomSource, SamplerError, ValidationError,
};
use rand::RngCore;

use crate::config::{SamplerConfig, DEFAULT_ATOL, DEFAULT_CUTOFF};
use crate::density::Density;

/// A law defined by an unnormalized [`Density`], drawn by slice sampling.
///
/// The normalizing constant (the *intensity*) is computed once at
/// construction. Draws are stateless: each one starts from `x0` and
/// consumes fresh randomness.
///
/// # Examples
///
/// ```
/// use popjump_sampling::{Density, DensitySampler, SamplerConfig};
///
/// let s = DensitySampler::new(Density::constant(1.0), SamplerConfig::default()).unwrap();
/// assert!((s.intensity() - 1.0).abs() < 1e-12);
/// assert!((s.x0() - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct DensitySampler {
    density: Density,
    intensity: f64,
    mean: Option<f64>,
    x0: f64,
    atol: f64,
    config: SamplerConfig,
}

impl DensitySampler {
    /// Build a sampler for `density` over `config.domain`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidParameter`] if the configuration is invalid.
    /// - [`ValidationError::NonPositiveIntensity`] if the density integrates
    ///   to zero, a negative number, NaN or infinity over the domain.
    /// - [`DomainError::OutsideDomain`] if `config.x0` is outside the domain.
    pub fn new(density: Density, config: SamplerConfig) -> Result<Self, SamplerError> {
        Self::build(density, config, DEFAULT_ATOL)
    }

    /// Sampler for `base(x) / x²`, zeroed below `cutoff`.
    ///
    /// Unless `config.atol` is set, the bracket tolerance is `cutoff / 1000`.
    pub fn over_square(
        base: Density,
        cutoff: f64,
        config: SamplerConfig,
    ) -> Result<Self, SamplerError> {
        check_cutoff(cutoff)?;
        Self::build(base.over_square(cutoff), config, cutoff / 1000.0)
    }

    /// Sampler for `base(x) / x`, zeroed below `cutoff`.
    ///
    /// Unless `config.atol` is set, the bracket tolerance is `cutoff / 1000`.
    pub fn over_x(base: Density, cutoff: f64, config: SamplerConfig) -> Result<Self, SamplerError> {
        check_cutoff(cutoff)?;
        Self::build(base.over_x(cutoff), config, cutoff / 1000.0)
    }

    /// [`over_square`](Self::over_square) with the default cutoff and configuration.
    pub fn default_over_square(base: Density) -> Result<Self, SamplerError> {
        Self::over_square(base, DEFAULT_CUTOFF, SamplerConfig::default())
    }

    /// [`over_x`](Self::over_x) with the default cutoff and configuration.
    pub fn default_over_x(base: Density) -> Result<Self, SamplerError> {
        Self::over_x(base, DEFAULT_CUTOFF, SamplerConfig::default())
    }

    fn build(
        density: Density,
        config: SamplerConfig,
        default_atol: f64,
    ) -> Result<Self, SamplerError> {
        config.validate()?;
        let (low, high) = config.domain;
        let breakpoints = density.breakpoints();

        let intensity = integrate(
            |x| density.eval(x),
            low,
            high,
            &breakpoints,
            &config.quadrature,
        )
        .value;
        if !(intensity > 0.0 && intensity.is_finite()) {
            return Err(ValidationError::NonPositiveIntensity { intensity }.into());
        }

        let (x0, mean) = match config.x0 {
            Some(x0) => {
                // Negated comparison also rejects NaN.
                if !(low <= x0 && x0 <= high) {
                    return Err(DomainError::OutsideDomain { x0, low, high }.into());
                }
                (x0, None)
            }
            None => {
                let first_moment = integrate(
                    |x| x * density.eval(x),
                    low,
                    high,
                    &breakpoints,
                    &config.quadrature,
                )
                .value;
                let mean = first_moment / intensity;
                (mean.clamp(low, high), Some(mean))
            }
        };

        let atol = config.resolved_atol(default_atol);
        debug!(
            "density sampler on [{low}, {high}]: intensity={intensity}, x0={x0}, atol={atol}"
        );

        Ok(Self {
            density,
            intensity,
            mean,
            x0,
            atol,
            config,
        })
    }

    /// Normalizing constant: the integral of the density over the domain.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Start point of every draw.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Normalized mean, if it was computed (only when no `x0` was given).
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Sampling interval `[low, high]`.
    pub fn domain(&self) -> (f64, f64) {
        self.config.domain
    }

    /// Effective bracket tolerance.
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Outer iteration budget per draw.
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    /// The configuration the sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The underlying unnormalized density.
    pub fn unnormalized(&self) -> &Density {
        &self.density
    }

    /// Draw one value by slice sampling.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let (low, high) = self.config.domain;
        let mut x = self.x0;

        for step in 0..self.config.iterations {
            let height = self.density.eval(x) * rng.uniform();
            let (mut left, mut right) = (low, high);
            loop {
                let v = rng.uniform_in(left, right);
                if self.density.eval(v) > height {
                    x = v;
                    break;
                }
                if v < x {
                    left = v;
                } else {
                    right = v;
                }
                if right - left < self.atol {
                    trace!("slice bracket below {} after {step} steps, stopping at {x}", self.atol);
                    return x;
                }
            }
        }
        x
    }
}

impl MarkDistribution<f64> for DensitySampler {
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.sample(rng)
    }

    /// Normalized density; zero outside the domain.
    fn density(&self, x: f64) -> f64 {
        let (low, high) = self.config.domain;
        if x < low || x > high {
            return 0.0;
        }
        self.density.eval(x) / self.intensity
    }
}

fn check_cutoff(cutoff: f64) -> Result<(), ValidationError> {
    if !cutoff.is_finite() || cutoff <= 0.0 {
        return Err(ValidationError::InvalidParameter {
            name: "cutoff",
            reason: format!("must be finite and > 0, got {cutoff}"),
        });
    }
    Ok(())
}
