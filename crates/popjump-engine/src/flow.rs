//! Closed-form deterministic flow between jumps.
//!
//! Between events the population follows the linear ODE
//! `dN/dt = γ_b − γ_d·N`, which is solved exactly:
//!
//! ```text
//! γ_d = 0:  N(t1) = N0 + (t1 − t0)·γ_b
//! γ_d ≠ 0:  N(t1) = C + (N0 − C)·exp(−γ_d·(t1 − t0)),  C = γ_b / γ_d
//! ```
//!
//! For `γ_d > 0` the exponential only decays, so long intervals settle on
//! the equilibrium `C` instead of overflowing.

/// Drift coefficients `(γ_d, γ_b)`.
///
/// The fields are unconstrained so the flow can be evaluated for any
/// pair; [`Model`](crate::Model) rejects negative components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Drift {
    /// Death rate `γ_d`.
    pub death: f64,
    /// Birth rate `γ_b`.
    pub birth: f64,
}

impl Drift {
    /// Build a drift from `(γ_d, γ_b)`.
    pub fn new(death: f64, birth: f64) -> Self {
        Self { death, birth }
    }

    /// Fixed point `γ_b / γ_d` of the flow, if `γ_d ≠ 0`.
    pub fn equilibrium(&self) -> Option<f64> {
        if self.death == 0.0 {
            None
        } else {
            Some(self.birth / self.death)
        }
    }

    /// Evolve `n0` from `t0` to `t1`. Same as [`flow`].
    #[inline]
    pub fn flow(&self, t0: f64, t1: f64, n0: f64) -> f64 {
        flow(self, t0, t1, n0)
    }
}

impl From<(f64, f64)> for Drift {
    fn from((death, birth): (f64, f64)) -> Self {
        Self { death, birth }
    }
}

/// Solve `dN/dt = γ_b − γ_d·N` on `[t0, t1]` from `N(t0) = n0`.
///
/// # Examples
///
/// ```
/// use popjump_engine::{flow, Drift};
///
/// let n = flow(&Drift::new(1.0, 2.0), 3.4, 4.2, 1.003624);
/// assert!((n - 1.552299404048739).abs() < 1e-12);
/// ```
#[inline]
pub fn flow(drift: &Drift, t0: f64, t1: f64, n0: f64) -> f64 {
    let dt = t1 - t0;
    if drift.death == 0.0 {
        n0 + dt * drift.birth
    } else {
        let c = drift.birth / drift.death;
        c + (n0 - c) * (-drift.death * dt).exp()
    }
}
