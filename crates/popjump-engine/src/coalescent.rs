//! Backward reconstruction of the lineage-counting process.
//!
//! Starting from `n0` lineages at the horizon, the jumps of a completed
//! [`Simulation`] are visited from last to first. At a jump with mark
//! `(z_d, z_b)` and post-jump size `Np`, each lineage independently
//! descends from the newborn mass with probability `p = z_b / Np`. When
//! `k ≥ 2` lineages are picked they merge into one, leaving
//! `count − k + 1`; zero or one picked lineage leaves no visible trace.

use log::debug;
use popjump_core::{RandomSource, ValidationError};
use rand::RngCore;

use crate::simulation::Simulation;

/// Recorded `(time, lineage count)` pairs in decreasing time order.
///
/// The first entry is always `(T, n0)`; each further entry marks a
/// merger. Counts never increase along the sequence and there are at
/// most as many mergers as jumps.
#[derive(Clone, Debug, PartialEq)]
pub struct Coalescent {
    entries: Vec<(f64, u64)>,
}

impl Coalescent {
    /// Run the backward recursion over `simulation` from `n0` lineages.
    ///
    /// One binomial draw is taken per jump, latest jump first.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationError::InvalidLineageCount)` if `n0 <= 0`.
    pub fn new(
        simulation: &Simulation,
        n0: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ValidationError> {
        if n0 <= 0 {
            return Err(ValidationError::InvalidLineageCount { n0 });
        }
        let n0 = n0 as u64;

        let realisation = simulation.realisation();
        let post_jump = simulation.post_jump();

        let mut count = n0;
        let mut entries = vec![(simulation.horizon(), n0)];
        for ((time, mark), &size) in realisation.iter().zip(post_jump).rev() {
            let picked = rng.binomial(count, mark.birth / size);
            if picked >= 2 {
                count = count - picked + 1;
                entries.push((time, count));
            }
        }

        debug!(
            "coalescent finished: {} mergers over {} jumps, {n0} -> {count} lineages",
            entries.len() - 1,
            realisation.len()
        );

        Ok(Self { entries })
    }

    /// Recorded `(time, count)` pairs, latest first.
    pub fn entries(&self) -> &[(f64, u64)] {
        &self.entries
    }

    /// Recorded times, decreasing.
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.entries.iter().map(|&(t, _)| t)
    }

    /// Recorded lineage counts, non-increasing.
    pub fn counts(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.entries.iter().map(|&(_, n)| n)
    }

    /// Lineage count at the horizon.
    pub fn initial_count(&self) -> u64 {
        self.entries[0].1
    }

    /// Lineage count after the earliest recorded merger.
    pub fn final_count(&self) -> u64 {
        self.entries[self.entries.len() - 1].1
    }

    /// Number of recorded mergers.
    pub fn merge_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Time at which the lineages first coalesce into one, if they do
    /// within the horizon.
    pub fn most_recent_common_ancestor(&self) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(_, n)| n == 1)
            .map(|&(t, _)| t)
    }
}
