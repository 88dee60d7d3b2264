//! Mark laws for the popjump population simulator.
//!
//! Everything here implements
//! [`MarkDistribution`](popjump_core::MarkDistribution):
//!
//! - [`Parametric`]: closed-form families (uniform, beta, point mass).
//! - [`DensitySampler`]: any unnormalized [`Density`] on a bounded
//!   interval, drawn by slice sampling, with its normalizing constant
//!   computed by quadrature.
//! - [`Doubled`] and [`Independent`]: lift one-dimensional laws onto the
//!   two-coordinate mark space `(z_d, z_b)`.
//!
//! The canonical transforms ÷x and ÷x² (cut off below ε) express the
//! singular jump laws used by the model; see
//! [`DensitySampler::over_x`] and [`DensitySampler::over_square`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod density;
pub mod paired;
pub mod parametric;
pub mod slice;

pub use config::{SamplerConfig, DEFAULT_ATOL, DEFAULT_CUTOFF, DEFAULT_ITERATIONS};
pub use density::{Density, DensityFn};
pub use paired::{Doubled, Independent};
pub use parametric::Parametric;
pub use slice::DensitySampler;
