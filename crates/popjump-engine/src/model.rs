//! The population model: drift plus jump process.

use std::sync::Arc;

use popjump_core::ValidationError;

use crate::flow::Drift;
use crate::ppp::PoissonPointProcess;

/// Drift coefficients together with the point process of jumps.
///
/// Both drift components are checked to be non-negative at construction;
/// the model is immutable afterwards and cheap to clone.
#[derive(Clone, Debug)]
pub struct Model {
    drift: Drift,
    process: Arc<PoissonPointProcess>,
}

impl Model {
    /// Build a model, rejecting negative or non-finite drift components.
    ///
    /// # Examples
    ///
    /// ```
    /// use popjump_engine::{Drift, Model, PoissonPointProcess};
    /// use popjump_sampling::{Doubled, Parametric};
    ///
    /// let ppp = PoissonPointProcess::new(1.0, Doubled::new(Parametric::default())).unwrap();
    /// assert!(Model::new(Drift::new(1.0, 0.0), ppp.clone()).is_ok());
    /// assert!(Model::new(Drift::new(-1.0, 0.0), ppp).is_err());
    /// ```
    pub fn new(
        drift: Drift,
        process: impl Into<Arc<PoissonPointProcess>>,
    ) -> Result<Self, ValidationError> {
        check_component("death", drift.death)?;
        check_component("birth", drift.birth)?;
        Ok(Self {
            drift,
            process: process.into(),
        })
    }

    /// Drift coefficients `(γ_d, γ_b)`.
    pub fn drift(&self) -> Drift {
        self.drift
    }

    /// The jump process.
    pub fn process(&self) -> &PoissonPointProcess {
        &self.process
    }

    /// Shared handle to the jump process.
    pub fn shared_process(&self) -> &Arc<PoissonPointProcess> {
        &self.process
    }
}

fn check_component(component: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidParameter {
            name: component,
            reason: format!("drift must be finite, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeDrift { component, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use popjump_sampling::{Doubled, Parametric};

    fn ppp() -> PoissonPointProcess {
        PoissonPointProcess::new(3.0, Doubled::new(Parametric::default())).unwrap()
    }

    #[test]
    fn accepts_zero_drift() {
        let m = Model::new(Drift::default(), ppp()).unwrap();
        assert_eq!(m.drift(), Drift::new(0.0, 0.0));
        assert_eq!(m.process().rate(), 3.0);
    }

    #[test]
    fn rejects_negative_death() {
        let err = Model::new(Drift::new(-0.1, 1.0), ppp()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeDrift {
                component: "death",
                value: -0.1
            }
        );
    }

    #[test]
    fn rejects_negative_birth() {
        let err = Model::new(Drift::new(1.0, -2.0), ppp()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NegativeDrift {
                component: "birth",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_drift() {
        assert!(Model::new(Drift::new(f64::NAN, 1.0), ppp()).is_err());
        assert!(Model::new(Drift::new(1.0, f64::INFINITY), ppp()).is_err());
    }

    #[test]
    fn shares_process_between_clones() {
        let shared = Arc::new(ppp());
        let a = Model::new(Drift::new(1.0, 1.0), shared.clone()).unwrap();
        let b = a.clone();
        assert!(Arc::ptr_eq(a.shared_process(), &shared));
        assert!(Arc::ptr_eq(b.shared_process(), &shared));
    }
}
