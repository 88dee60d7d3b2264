//! popjump: simulation of jump-flow population models.
//!
//! A population follows the linear flow `dN/dt = γ_b − γ_d·N` between
//! the events of a marked Poisson process; at each event a fraction
//! `z_d` dies and `z_b` is born. Marks may come from arbitrary
//! (possibly heavy-tailed) densities, drawn by slice sampling. A
//! completed run can be walked backwards to reconstruct the lineage
//! count of a sample taken at the horizon.
//!
//! This is the facade crate that re-exports the public API from all
//! popjump sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use popjump::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Marks drawn from x⁻² on [1e-3, 1), with z_d = z_b.
//! let sampler = DensitySampler::over_square(
//!     Density::constant(1.0),
//!     1e-3,
//!     SamplerConfig::default(),
//! ).unwrap();
//! let model = Model::new(
//!     Drift::new(1.0, 1.0),
//!     PoissonPointProcess::from_sampler(sampler),
//! ).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let sim = Simulation::run(model, SimulationConfig::default(), &mut rng).unwrap();
//! assert_eq!(sim.trajectory().len(), 101);
//!
//! let coal = Coalescent::new(&sim, 100, &mut rng).unwrap();
//! assert!(coal.counts().all(|n| (1..=100).contains(&n)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `popjump-core` | Marks, errors, quadrature, randomness traits |
//! | [`sampling`] | `popjump-sampling` | Densities, slice sampler, parametric and paired laws |
//! | [`engine`] | `popjump-engine` | Flow, jump process, forward simulation, coalescent |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and numerics (`popjump-core`).
///
/// Contains [`types::Mark`], the error types, adaptive quadrature
/// ([`types::integrate`]) and the [`types::MarkDistribution`] and
/// [`types::RandomSource`] traits.
pub use popjump_core as types;

/// Mark densities and samplers (`popjump-sampling`).
///
/// [`sampling::DensitySampler`] draws from any non-negative density on a
/// bounded domain; [`sampling::Density`] builds the `1/x` and `1/x²`
/// transforms with a cutoff.
pub use popjump_sampling as sampling;

/// Forward simulation and backward reconstruction (`popjump-engine`).
pub use popjump_engine as engine;

/// Common imports for typical popjump usage.
///
/// ```rust
/// use popjump::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use popjump_core::{Mark, MarkDistribution, RandomSource};

    // Errors
    pub use popjump_core::{DomainError, SamplerError, ValidationError};

    // Sampling
    pub use popjump_sampling::{
        Density, DensitySampler, Doubled, Independent, Parametric, SamplerConfig,
    };

    // Engine
    pub use popjump_engine::{
        flow, Coalescent, Drift, Model, PointRealisation, PoissonPointProcess, Simulation,
        SimulationConfig,
    };
}
