//! The jump mark attached to each reproduction event.

use std::fmt;

/// Mark `(z_d, z_b)` of a reproduction event.
///
/// At an event the population jumps as
/// `N_after = (1 - death) * N_before + birth`: `death` is the fraction
/// of the population removed and `birth` the mass added.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mark {
    /// Multiplicative death factor `z_d`.
    pub death: f64,
    /// Additive birth contribution `z_b`.
    pub birth: f64,
}

impl Mark {
    /// Build a mark from its two components.
    pub fn new(death: f64, birth: f64) -> Self {
        Self { death, birth }
    }

    /// A mark whose two components are identical.
    pub fn doubled(z: f64) -> Self {
        Self { death: z, birth: z }
    }

    /// Apply the jump map to a population size.
    #[inline]
    pub fn apply(&self, size: f64) -> f64 {
        (1.0 - self.death) * size + self.birth
    }
}

impl From<(f64, f64)> for Mark {
    fn from((death, birth): (f64, f64)) -> Self {
        Self { death, birth }
    }
}

impl From<Mark> for (f64, f64) {
    fn from(m: Mark) -> Self {
        (m.death, m.birth)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.death, self.birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_mark_leaves_size_unchanged() {
        assert_eq!(Mark::default().apply(3.25), 3.25);
    }

    #[test]
    fn doubled_mark_pulls_toward_one() {
        let m = Mark::doubled(0.5);
        assert_eq!(m.apply(3.0), 2.0);
        assert_eq!(m.apply(1.0), 1.0);
    }

    #[test]
    fn tuple_round_trip() {
        let m: Mark = (0.25, 0.75).into();
        assert_eq!(<(f64, f64)>::from(m), (0.25, 0.75));
    }
}
