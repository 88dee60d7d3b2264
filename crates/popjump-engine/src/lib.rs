//! Simulation engine for the popjump population model.
//!
//! The forward pass interleaves a closed-form drift [`flow`] with the
//! jumps of a marked [`PoissonPointProcess`] to produce a
//! [`Simulation`]; the backward pass walks the jumps in reverse to
//! reconstruct the lineage-counting [`Coalescent`].
//!
//! ```
//! use popjump_engine::{Drift, Model, PoissonPointProcess, Simulation, SimulationConfig};
//! use popjump_engine::Coalescent;
//! use popjump_sampling::{Density, DensitySampler};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let sampler = DensitySampler::over_square(
//!     Density::constant(1.0),
//!     1e-2,
//!     Default::default(),
//! ).unwrap();
//! let ppp = PoissonPointProcess::from_sampler(sampler);
//! let model = Model::new(Drift::new(1.0, 1.0), ppp).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let config = SimulationConfig { horizon: 1.0, dt: 0.01, initial_size: 1.0 };
//! let sim = Simulation::run(model, config, &mut rng).unwrap();
//! assert_eq!(sim.trajectory().len(), 101);
//!
//! let coal = Coalescent::new(&sim, 10, &mut rng).unwrap();
//! assert_eq!(coal.entries()[0], (1.0, 10));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coalescent;
pub mod config;
pub mod flow;
pub mod model;
pub mod ppp;
pub mod simulation;

pub use coalescent::Coalescent;
pub use config::{SimulationConfig, MAX_STEPS};
pub use flow::{flow, Drift};
pub use model::Model;
pub use ppp::{PointRealisation, PoissonPointProcess};
pub use simulation::Simulation;
