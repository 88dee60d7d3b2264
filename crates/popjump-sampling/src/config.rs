//! Sampler configuration and its defaults.

use popjump_core::{QuadratureConfig, ValidationError};

/// Default outer iteration budget of the slice sampler.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Default bracket-width tolerance of the slice sampler.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Default cutoff ε of the ÷x and ÷x² transforms.
pub const DEFAULT_CUTOFF: f64 = 1e-5;

/// Configuration for [`DensitySampler`](crate::DensitySampler).
///
/// Constructed once and passed by value. `validate()` runs inside the
/// sampler constructors; draws never re-check it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Sampling interval `[low, high]`. Default: `(0, 1)`.
    pub domain: (f64, f64),
    /// Start point of every draw. `None` = normalized mean of the density,
    /// clamped into the domain. Default: `None`.
    pub x0: Option<f64>,
    /// Outer slice-sampling iterations per draw. Default: [`DEFAULT_ITERATIONS`].
    pub iterations: usize,
    /// Bracket width below which a draw stops early. `None` = [`DEFAULT_ATOL`]
    /// for plain densities, `ε / 1000` for the canonical transforms.
    pub atol: Option<f64>,
    /// Quadrature used for the normalizing constant and the mean.
    pub quadrature: QuadratureConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            x0: None,
            iterations: DEFAULT_ITERATIONS,
            atol: None,
            quadrature: QuadratureConfig::default(),
        }
    }
}

impl SamplerConfig {
    /// Check the structural invariants of the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (low, high) = self.domain;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ValidationError::InvalidParameter {
                name: "domain",
                reason: format!("expected finite bounds with low < high, got [{low}, {high}]"),
            });
        }
        if self.iterations == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(atol) = self.atol {
            if !atol.is_finite() || atol <= 0.0 {
                return Err(ValidationError::InvalidParameter {
                    name: "atol",
                    reason: format!("must be finite and > 0, got {atol}"),
                });
            }
        }
        let q = &self.quadrature;
        if q.rtol.is_nan() || q.rtol < 0.0 || q.atol.is_nan() || q.atol < 0.0 {
            return Err(ValidationError::InvalidParameter {
                name: "quadrature",
                reason: format!("tolerances must be >= 0, got rtol={} atol={}", q.rtol, q.atol),
            });
        }
        Ok(())
    }

    /// The bracket tolerance, falling back to `default` when unset.
    pub fn resolved_atol(&self, default: f64) -> f64 {
        self.atol.unwrap_or(default)
    }

    /// Same configuration on a different domain.
    pub fn with_domain(mut self, low: f64, high: f64) -> Self {
        self.domain = (low, high);
        self
    }

    /// Same configuration with a fixed start point.
    pub fn with_x0(mut self, x0: f64) -> Self {
        self.x0 = Some(x0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SamplerConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.domain, (0.0, 1.0));
        assert_eq!(c.iterations, DEFAULT_ITERATIONS);
        assert_eq!(c.resolved_atol(DEFAULT_ATOL), DEFAULT_ATOL);
    }

    #[test]
    fn rejects_inverted_domain() {
        let c = SamplerConfig::default().with_domain(1.0, 0.0);
        assert!(matches!(
            c.validate(),
            Err(ValidationError::InvalidParameter { name: "domain", .. })
        ));
    }

    #[test]
    fn rejects_infinite_domain() {
        let c = SamplerConfig::default().with_domain(0.0, f64::INFINITY);
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = SamplerConfig {
            iterations: 0,
            ..SamplerConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_atol() {
        for atol in [0.0, -1.0, f64::NAN] {
            let c = SamplerConfig {
                atol: Some(atol),
                ..SamplerConfig::default()
            };
            assert!(c.validate().is_err(), "atol {atol} accepted");
        }
    }

    #[test]
    fn explicit_atol_wins() {
        let c = SamplerConfig {
            atol: Some(1e-3),
            ..SamplerConfig::default()
        };
        assert_eq!(c.resolved_atol(DEFAULT_ATOL), 1e-3);
    }
}
