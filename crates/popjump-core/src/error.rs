//! Error types for the popjump workspace.
//!
//! Split by failure class: [`ValidationError`] for rejected parameters at
//! a construction boundary, [`DomainError`] for points outside a sampling
//! domain, and [`SamplerError`] as the union returned by sampler
//! constructors.

use std::error::Error;
use std::fmt;

/// A parameter was rejected at a construction boundary.
///
/// Raised by `Model`, `DensitySampler`, `PoissonPointProcess`,
/// `Simulation` and `Coalescent` constructors. Once a value is
/// constructed, downstream operations do not re-validate.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A drift coefficient is negative.
    NegativeDrift {
        /// Which coefficient (`"death"` or `"birth"`).
        component: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The integral of a density over its domain is not a positive finite number.
    NonPositiveIntensity {
        /// The computed integral.
        intensity: f64,
    },
    /// The initial lineage count of a coalescent is not a positive integer.
    InvalidLineageCount {
        /// The rejected count.
        n0: i64,
    },
    /// Any other parameter that failed validation.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the constraint that was violated.
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDrift { component, value } => {
                write!(f, "{component} drift must be >= 0, got {value}")
            }
            Self::NonPositiveIntensity { intensity } => {
                write!(f, "density integral must be positive and finite, got {intensity}")
            }
            Self::InvalidLineageCount { n0 } => {
                write!(f, "initial lineage count must be a positive integer, got {n0}")
            }
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
        }
    }
}

impl Error for ValidationError {}

/// A point lies outside the domain it must belong to.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainError {
    /// The slice sampler start point is outside `[low, high]`.
    OutsideDomain {
        /// The offending start point.
        x0: f64,
        /// Lower domain bound.
        low: f64,
        /// Upper domain bound.
        high: f64,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideDomain { x0, low, high } => {
                write!(f, "start point {x0} outside sampling domain [{low}, {high}]")
            }
        }
    }
}

impl Error for DomainError {}

/// Errors from constructing a density sampler.
#[derive(Clone, Debug, PartialEq)]
pub enum SamplerError {
    /// Configuration or density rejected.
    Validation(ValidationError),
    /// Start point outside the sampling domain.
    Domain(DomainError),
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Domain(e) => write!(f, "domain: {e}"),
        }
    }
}

impl Error for SamplerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Domain(e) => Some(e),
        }
    }
}

impl From<ValidationError> for SamplerError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DomainError> for SamplerError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_component() {
        let e = ValidationError::NegativeDrift {
            component: "birth",
            value: -0.5,
        };
        assert_eq!(e.to_string(), "birth drift must be >= 0, got -0.5");
    }

    #[test]
    fn sampler_error_chains_source() {
        let e: SamplerError = DomainError::OutsideDomain {
            x0: 2.0,
            low: 0.0,
            high: 1.0,
        }
        .into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("outside sampling domain"));
    }

    #[test]
    fn validation_converts_into_sampler_error() {
        let e: SamplerError = ValidationError::NonPositiveIntensity { intensity: 0.0 }.into();
        assert!(matches!(
            e,
            SamplerError::Validation(ValidationError::NonPositiveIntensity { .. })
        ));
    }
}
