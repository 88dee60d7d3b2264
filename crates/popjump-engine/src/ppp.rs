//! Marked Poisson point process on a bounded horizon.

use std::sync::Arc;

use popjump_core::{Mark, MarkDistribution, RandomSource, ValidationError};
use popjump_sampling::{DensitySampler, Doubled};
use rand::RngCore;

/// A marked Poisson point process: events at constant `rate`, each
/// carrying an i.i.d. [`Mark`] from `marks`.
///
/// Immutable once built; cloning shares the mark law.
#[derive(Clone, Debug)]
pub struct PoissonPointProcess {
    rate: f64,
    marks: Arc<dyn MarkDistribution<Mark>>,
}

impl PoissonPointProcess {
    /// Build a process from a rate and a mark law.
    ///
    /// Returns `Err(ValidationError::InvalidParameter)` unless `rate` is
    /// finite and positive.
    pub fn new<M>(rate: f64, marks: M) -> Result<Self, ValidationError>
    where
        M: MarkDistribution<Mark> + 'static,
    {
        Self::from_shared(rate, Arc::new(marks))
    }

    /// Build a process around an already shared mark law.
    pub fn from_shared(
        rate: f64,
        marks: Arc<dyn MarkDistribution<Mark>>,
    ) -> Result<Self, ValidationError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                name: "rate",
                reason: format!("must be finite and > 0, got {rate}"),
            });
        }
        Ok(Self { rate, marks })
    }

    /// Process whose rate is the sampler's normalizing constant and whose
    /// marks are the sampler's draws doubled onto `(X, X)`.
    ///
    /// The sampler constructor already guarantees a positive finite
    /// intensity, so this cannot fail.
    pub fn from_sampler(sampler: DensitySampler) -> Self {
        Self {
            rate: sampler.intensity(),
            marks: Arc::new(Doubled::new(sampler)),
        }
    }

    /// Event rate (intensity).
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The mark law.
    pub fn marks(&self) -> &Arc<dyn MarkDistribution<Mark>> {
        &self.marks
    }

    /// Expected number of events on `[0, horizon]`.
    pub fn expected_count(&self, horizon: f64) -> f64 {
        self.rate * horizon
    }

    /// Draw one realisation on `[0, horizon]`.
    ///
    /// Randomness is consumed in a fixed order: the event count, then
    /// every event time, then every mark. Times are sorted ascending and
    /// the marks are permuted alongside, so each mark keeps the time it
    /// was drawn with. A non-positive horizon yields no events.
    pub fn sample(&self, horizon: f64, rng: &mut dyn RngCore) -> PointRealisation {
        let count = rng.poisson(self.rate * horizon) as usize;
        let times: Vec<f64> = (0..count).map(|_| rng.uniform_in(0.0, horizon)).collect();
        let marks = self.marks.draw_n(rng, count);

        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));

        PointRealisation {
            horizon,
            times: order.iter().map(|&i| times[i]).collect(),
            marks: order.iter().map(|&i| marks[i]).collect(),
        }
    }
}

/// One draw of a marked point process: ascending event times on
/// `[0, horizon]` with their marks, index for index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointRealisation {
    horizon: f64,
    times: Vec<f64>,
    marks: Vec<Mark>,
}

impl PointRealisation {
    /// Assemble a realisation from explicit events.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationError::InvalidParameter)` if the sequences
    /// differ in length, the times are not strictly increasing, or any
    /// time lies outside `[0, horizon]`.
    pub fn new(horizon: f64, times: Vec<f64>, marks: Vec<Mark>) -> Result<Self, ValidationError> {
        if times.len() != marks.len() {
            return Err(ValidationError::InvalidParameter {
                name: "marks",
                reason: format!("{} times but {} marks", times.len(), marks.len()),
            });
        }
        if let Some(&t) = times.iter().find(|&&t| !(0.0..=horizon).contains(&t)) {
            return Err(ValidationError::InvalidParameter {
                name: "times",
                reason: format!("event time {t} outside [0, {horizon}]"),
            });
        }
        if let Some(w) = times.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ValidationError::InvalidParameter {
                name: "times",
                reason: format!("times not strictly increasing: {} then {}", w[0], w[1]),
            });
        }
        Ok(Self {
            horizon,
            times,
            marks,
        })
    }

    /// A realisation with no events.
    pub fn empty(horizon: f64) -> Self {
        Self {
            horizon,
            times: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// Horizon `T` the realisation was drawn on.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Event times, ascending.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Marks, aligned with [`times`](Self::times).
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether there are no events.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `(time, mark)` pairs in ascending time order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, Mark)> + ExactSizeIterator + '_ {
        self.times.iter().copied().zip(self.marks.iter().copied())
    }
}
