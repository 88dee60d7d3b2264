//! Unnormalized densities accepted by the slice sampler.

use std::fmt;
use std::sync::Arc;

use popjump_core::MarkDistribution;

/// A user-supplied unnormalized density.
pub type DensityFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// An unnormalized density on the real line.
///
/// Either a base density (a closure or an existing distribution's
/// density) or one of the two canonical transforms of a base density:
///
/// - [`Density::OverX`]: `x ↦ base(x) / x` for `x ≥ ε`, zero below.
/// - [`Density::OverSquare`]: `x ↦ base(x) / x²` for `x ≥ ε`, zero below.
///
/// The cutoff ε regularizes densities that are singular at the origin.
/// Transforms nest, and every cutoff is reported as a quadrature
/// breakpoint by [`Density::breakpoints`].
#[derive(Clone)]
pub enum Density {
    /// Plain closure.
    Function(DensityFn),
    /// Density of an existing one-dimensional law.
    Law(Arc<dyn MarkDistribution<f64>>),
    /// `base / x`, zero below `cutoff`.
    OverX {
        /// Density being transformed.
        base: Box<Density>,
        /// Cutoff ε.
        cutoff: f64,
    },
    /// `base / x²`, zero below `cutoff`.
    OverSquare {
        /// Density being transformed.
        base: Box<Density>,
        /// Cutoff ε.
        cutoff: f64,
    },
}

impl Density {
    /// Wrap a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// The constant density `value`.
    pub fn constant(value: f64) -> Self {
        Self::function(move |_| value)
    }

    /// Use the density of an existing law.
    pub fn law<D>(law: D) -> Self
    where
        D: MarkDistribution<f64> + 'static,
    {
        Self::Law(Arc::new(law))
    }

    /// Divide by `x`, zeroed below `cutoff`.
    pub fn over_x(self, cutoff: f64) -> Self {
        Self::OverX {
            base: Box::new(self),
            cutoff,
        }
    }

    /// Divide by `x²`, zeroed below `cutoff`.
    pub fn over_square(self, cutoff: f64) -> Self {
        Self::OverSquare {
            base: Box::new(self),
            cutoff,
        }
    }

    /// Evaluate the density at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Function(f) => f(x),
            Self::Law(law) => law.density(x),
            Self::OverX { base, cutoff } => {
                if x < *cutoff {
                    0.0
                } else {
                    base.eval(x) / x
                }
            }
            Self::OverSquare { base, cutoff } => {
                if x < *cutoff {
                    0.0
                } else {
                    base.eval(x) / (x * x)
                }
            }
        }
    }

    /// Points where the density is known to jump.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.collect_breakpoints(&mut out);
        out
    }

    fn collect_breakpoints(&self, out: &mut Vec<f64>) {
        match self {
            Self::Function(_) | Self::Law(_) => {}
            Self::OverX { base, cutoff } | Self::OverSquare { base, cutoff } => {
                out.push(*cutoff);
                base.collect_breakpoints(out);
            }
        }
    }
}

impl fmt::Debug for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Law(law) => f.debug_tuple("Law").field(law).finish(),
            Self::OverX { base, cutoff } => f
                .debug_struct("OverX")
                .field("base", base)
                .field("cutoff", cutoff)
                .finish(),
            Self::OverSquare { base, cutoff } => f
                .debug_struct("OverSquare")
                .field("base", base)
                .field("cutoff", cutoff)
                .finish(),
        }
    }
}
