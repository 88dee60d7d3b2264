//! Reusable model fixtures.
//!
//! - [`static_model`]: zero drift with marks fixed at `(0, 0)`, so the
//!   population never moves.
//! - [`uniform_model`]: uniform doubled marks on `[0, 1]`.
//! - [`over_square_model`]: doubled marks from the `1/x²` transform of a
//!   flat density, the heavy-tailed case the sampler exists for.

use popjump_core::{SamplerError, ValidationError};
use popjump_engine::{Drift, Model, PoissonPointProcess};
use popjump_sampling::{Density, DensitySampler, Doubled, Parametric, SamplerConfig};

/// Doubled marks uniform on `[0, 1]`.
pub fn uniform_marks() -> Doubled<Parametric> {
    Doubled::new(Parametric::default())
}

/// Doubled marks fixed at `(value, value)`.
pub fn dirac_marks(value: f64) -> Result<Doubled<Parametric>, ValidationError> {
    Ok(Doubled::new(Parametric::dirac(value)?))
}

/// Zero drift with `(0, 0)` marks at the given rate.
///
/// Every jump leaves the population unchanged, so both the grid
/// trajectory and the post-jump values stay at `N0`.
pub fn static_model(rate: f64) -> Result<Model, ValidationError> {
    let ppp = PoissonPointProcess::new(rate, dirac_marks(0.0)?)?;
    Model::new(Drift::default(), ppp)
}

/// Uniform doubled marks at `rate` with the given drift.
pub fn uniform_model(drift: Drift, rate: f64) -> Result<Model, ValidationError> {
    let ppp = PoissonPointProcess::new(rate, uniform_marks())?;
    Model::new(drift, ppp)
}

/// Sampler for the flat density under the `1/x²` transform with `cutoff`.
///
/// # Panics
///
/// Panics if the sampler cannot be built for `cutoff`.
pub fn over_square_sampler(cutoff: f64) -> DensitySampler {
    DensitySampler::over_square(Density::constant(1.0), cutoff, SamplerConfig::default())
        .unwrap_or_else(|e| panic!("over-square sampler at cutoff {cutoff}: {e}"))
}

/// Heavy-tailed model: the `1/x²` sampler drives both mark coordinates.
///
/// Errors from building the sampler or the model are returned.
pub fn over_square_model(drift: Drift, cutoff: f64) -> Result<Model, SamplerError> {
    let sampler =
        DensitySampler::over_square(Density::constant(1.0), cutoff, SamplerConfig::default())?;
    Ok(Model::new(drift, PoissonPointProcess::from_sampler(sampler))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_square_model_returns_sampler_errors() {
        for cutoff in [0.0, -1e-3, f64::NAN] {
            let err = over_square_model(Drift::default(), cutoff).unwrap_err();
            assert!(matches!(
                err,
                SamplerError::Validation(ValidationError::InvalidParameter { name: "cutoff", .. })
            ));
        }
    }

    #[test]
    fn over_square_model_returns_model_errors() {
        assert!(matches!(
            over_square_model(Drift::new(-1.0, 0.0), 1e-2),
            Err(SamplerError::Validation(ValidationError::NegativeDrift { .. }))
        ));
    }

    #[test]
    fn over_square_model_builds() {
        let model = over_square_model(Drift::new(1.0, 1.0), 1e-2).unwrap();
        assert!((model.process().rate() - 99.0).abs() < 1e-4);
    }
}
