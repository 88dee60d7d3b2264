//! Simulation configuration and validation.

use popjump_core::ValidationError;

/// Upper bound on the number of grid intervals `ceil(T / Δt)`.
///
/// A run keeps two `f64` buffers of `steps + 1` entries (grid and
/// trajectory), so this caps them at 512 MiB each.
pub const MAX_STEPS: usize = 1 << 26;

/// Horizon, grid step and initial size of a forward simulation.
///
/// `validate()` runs when a [`Simulation`](crate::Simulation) is built;
/// the forward pass itself does not re-check these values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Horizon `T`. Default: 1.
    pub horizon: f64,
    /// Grid step `Δt`. Default: 0.01.
    pub dt: f64,
    /// Initial population size `N0`. Default: 1.
    pub initial_size: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: 1.0,
            dt: 0.01,
            initial_size: 1.0,
        }
    }
}

impl SimulationConfig {
    /// Check all structural invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                name: "horizon",
                reason: format!("must be finite and > 0, got {}", self.horizon),
            });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                name: "dt",
                reason: format!("must be finite and > 0, got {}", self.dt),
            });
        }
        if !self.initial_size.is_finite() {
            return Err(ValidationError::InvalidParameter {
                name: "initial_size",
                reason: format!("must be finite, got {}", self.initial_size),
            });
        }
        let steps = (self.horizon / self.dt).ceil();
        if steps > MAX_STEPS as f64 {
            return Err(ValidationError::InvalidParameter {
                name: "dt",
                reason: format!("horizon / dt gives {steps} steps, above the limit of {MAX_STEPS}"),
            });
        }
        Ok(())
    }

    /// Number of grid intervals, `ceil(T / Δt)`.
    pub fn steps(&self) -> usize {
        (self.horizon / self.dt).ceil() as usize
    }
}
