//! Forward simulation: deterministic flow interleaved with jumps.
//!
//! The horizon `[0, T]` is cut into `steps = ceil(T / Δt)` grid
//! intervals; the last grid point is clamped to `T` exactly, so a `Δt`
//! that does not divide `T` leaves a shorter final interval.
//!
//! Each interval `[t, t + Δt)` is processed in order. Every unconsumed
//! event with time strictly below the interval's upper bound is applied
//! in ascending time order: flow from the last processed time up to the
//! event, then jump `N ← (1 − z_d)·N + z_b`, recording the post-jump value.
//! The remaining sub-interval is then flowed to produce the grid value.

use log::debug;
use popjump_core::ValidationError;
use rand::RngCore;

use crate::config::SimulationConfig;
use crate::flow::flow;
use crate::model::Model;
use crate::ppp::PointRealisation;

/// A completed forward run.
///
/// Holds the model, the configuration, the jump realisation, the grid
/// trajectory `N` (length `steps + 1`, `N[0] = N0`) and the post-jump
/// values `Np` (one per event, aligned with the realisation).
#[derive(Clone, Debug)]
pub struct Simulation {
    model: Model,
    config: SimulationConfig,
    realisation: PointRealisation,
    grid: Vec<f64>,
    trajectory: Vec<f64>,
    post_jump: Vec<f64>,
}

impl Simulation {
    /// Draw a realisation of the model's jump process on `[0, T]` and
    /// integrate the population through it.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationError::InvalidParameter)` if `config` is invalid.
    pub fn run(
        model: Model,
        config: SimulationConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        let realisation = model.process().sample(config.horizon, rng);
        Ok(Self::integrate(model, config, realisation))
    }

    /// Integrate the population through a given realisation.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationError::InvalidParameter)` if `config` is
    /// invalid or an event lies at or beyond the horizon (it would never
    /// fall strictly inside a grid interval).
    pub fn with_realisation(
        model: Model,
        config: SimulationConfig,
        realisation: PointRealisation,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        if let Some(&last) = realisation.times().last() {
            if last >= config.horizon {
                return Err(ValidationError::InvalidParameter {
                    name: "realisation",
                    reason: format!(
                        "event at {last} is not before the horizon {}",
                        config.horizon
                    ),
                });
            }
        }
        Ok(Self::integrate(model, config, realisation))
    }

    fn integrate(model: Model, config: SimulationConfig, realisation: PointRealisation) -> Self {
        let drift = model.drift();
        let steps = config.steps();
        let times = realisation.times();
        let marks = realisation.marks();

        let grid: Vec<f64> = (0..=steps)
            .map(|i| {
                if i == steps {
                    config.horizon
                } else {
                    (i as f64 * config.dt).min(config.horizon)
                }
            })
            .collect();

        let mut trajectory = Vec::with_capacity(steps + 1);
        let mut post_jump = Vec::with_capacity(times.len());
        let mut value = config.initial_size;
        let mut last = 0.0;
        let mut cursor = 0;
        trajectory.push(value);

        for &upper in &grid[1..] {
            while cursor < times.len() && times[cursor] < upper {
                let t = times[cursor];
                value = marks[cursor].apply(flow(&drift, last, t, value));
                post_jump.push(value);
                last = t;
                cursor += 1;
            }
            value = flow(&drift, last, upper, value);
            last = upper;
            trajectory.push(value);
        }
        debug_assert_eq!(cursor, times.len(), "every event lies before the horizon");

        debug!(
            "simulation finished: {} events over {steps} steps, N(T) = {value}",
            times.len()
        );

        Self {
            model,
            config,
            realisation,
            grid,
            trajectory,
            post_jump,
        }
    }

    /// The model that was simulated.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The configuration of the run.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Horizon `T`.
    pub fn horizon(&self) -> f64 {
        self.config.horizon
    }

    /// Grid step `Δt`.
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    /// Initial size `N0`.
    pub fn initial_size(&self) -> f64 {
        self.config.initial_size
    }

    /// The jump realisation.
    pub fn realisation(&self) -> &PointRealisation {
        &self.realisation
    }

    /// Number of grid intervals.
    pub fn steps(&self) -> usize {
        self.grid.len() - 1
    }

    /// Grid times `0, Δt, 2Δt, …, T`.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Population size at each grid time (`N`).
    pub fn trajectory(&self) -> &[f64] {
        &self.trajectory
    }

    /// Population size right after each jump (`Np`).
    pub fn post_jump(&self) -> &[f64] {
        &self.post_jump
    }

    /// Population size at the horizon.
    pub fn final_size(&self) -> f64 {
        self.trajectory[self.trajectory.len() - 1]
    }

    /// `(time, N)` pairs along the grid, for plotting.
    pub fn series(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.grid
            .iter()
            .copied()
            .zip(self.trajectory.iter().copied())
    }
}
