//! Core types, traits and numerics for the popjump population simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the rest of the workspace: the jump
//! [`Mark`], the [`MarkDistribution`] capability, the [`RandomSource`]
//! extension trait, error types, and adaptive quadrature.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mark;
pub mod quadrature;
pub mod random;
pub mod traits;

pub use error::{DomainError, SamplerError, ValidationError};
pub use mark::Mark;
pub use quadrature::{integrate, QuadratureConfig, QuadratureResult};
pub use random::RandomSource;
pub use traits::MarkDistribution;
