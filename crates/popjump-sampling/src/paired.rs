//! Lifting one-dimensional laws onto the mark space `(z_d, z_b)`.

use popjump_core::{Mark, MarkDistribution, SamplerError};
use rand::RngCore;

use crate::config::SamplerConfig;
use crate::density::Density;
use crate::slice::DensitySampler;

/// Mark law whose two coordinates are the same draw.
///
/// Each draw takes one `X` from the inner law and returns the mark
/// `(X, X)`: death and birth factors forced identical. The density is
/// the inner density on the diagonal and zero off it.
///
/// # Examples
///
/// ```
/// use popjump_core::{Mark, MarkDistribution};
/// use popjump_sampling::{Doubled, Parametric};
///
/// let marks = Doubled::new(Parametric::default());
/// assert_eq!(marks.density(Mark::new(0.5, 0.5)), 1.0);
/// assert_eq!(marks.density(Mark::new(0.5, 0.4)), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Doubled<D> {
    inner: D,
}

impl<D> Doubled<D> {
    /// Wrap a one-dimensional law.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// The wrapped law.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl Doubled<DensitySampler> {
    /// Doubled marks drawn by slice sampling from a raw `density`.
    ///
    /// Shorthand for `Doubled::new(DensitySampler::new(density, config)?)`;
    /// an existing law goes through [`Doubled::new`] instead.
    ///
    /// # Errors
    ///
    /// Same as [`DensitySampler::new`].
    pub fn from_density(density: Density, config: SamplerConfig) -> Result<Self, SamplerError> {
        Ok(Self::new(DensitySampler::new(density, config)?))
    }
}

impl<D: MarkDistribution<f64>> MarkDistribution<Mark> for Doubled<D> {
    fn draw(&self, rng: &mut dyn RngCore) -> Mark {
        Mark::doubled(self.inner.draw(rng))
    }

    fn density(&self, x: Mark) -> f64 {
        if x.death == x.birth {
            self.inner.density(x.death)
        } else {
            0.0
        }
    }
}

/// Mark law with independent death and birth coordinates.
///
/// A draw takes the death factor first, then the birth contribution.
#[derive(Clone, Debug)]
pub struct Independent<D, B> {
    death: D,
    birth: B,
}

impl<D, B> Independent<D, B> {
    /// Combine a death law and a birth law.
    pub fn new(death: D, birth: B) -> Self {
        Self { death, birth }
    }
}

impl<D, B> MarkDistribution<Mark> for Independent<D, B>
where
    D: MarkDistribution<f64>,
    B: MarkDistribution<f64>,
{
    fn draw(&self, rng: &mut dyn RngCore) -> Mark {
        let death = self.death.draw(rng);
        let birth = self.birth.draw(rng);
        Mark { death, birth }
    }

    fn density(&self, x: Mark) -> f64 {
        self.death.density(x.death) * self.birth.density(x.birth)
    }
}
