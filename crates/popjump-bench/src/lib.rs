//! Reference models for benchmarking and examples.
//!
//! - [`reference_model`]: unit drift with doubled marks from the `1/x²`
//!   transform of a flat density at cutoff `1e-3` (about 999 events per
//!   unit time)
//! - [`reference_config`]: `T = 1`, `Δt = 1e-3`, `N0 = 1`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use popjump_core::SamplerError;
use popjump_engine::{Drift, Model, PoissonPointProcess, SimulationConfig};
use popjump_sampling::{Density, DensitySampler, SamplerConfig};

/// Cutoff of the reference mark law.
pub const REFERENCE_CUTOFF: f64 = 1e-3;

/// Slice sampler behind the reference mark law.
pub fn reference_sampler() -> Result<DensitySampler, SamplerError> {
    DensitySampler::over_square(
        Density::constant(1.0),
        REFERENCE_CUTOFF,
        SamplerConfig::default(),
    )
}

/// Build the reference model: drift `(γ_d, γ_b) = (1, 1)` driven by
/// [`reference_sampler`] with `z_d = z_b`.
pub fn reference_model() -> Result<Model, SamplerError> {
    let ppp = PoissonPointProcess::from_sampler(reference_sampler()?);
    Ok(Model::new(Drift::new(1.0, 1.0), ppp)?)
}

/// Reference run configuration: one time unit on a `1e-3` grid from `N0 = 1`.
pub fn reference_config() -> SimulationConfig {
    SimulationConfig {
        horizon: 1.0,
        dt: 1e-3,
        initial_size: 1.0,
    }
}
