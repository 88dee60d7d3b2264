//! The drawable-with-density capability shared by every mark law.

use rand::RngCore;

/// A distribution that can be drawn from and whose density can be evaluated.
///
/// Implemented by closed-form families (`Parametric`), by slice-sampled
/// custom densities (`DensitySampler`) and by the two-coordinate
/// combinators used for jump marks. `T` is the value type: `f64` for
/// one-dimensional laws, [`Mark`](crate::Mark) for mark laws.
///
/// Draws take a `dyn RngCore` so implementors stay object safe and can be
/// shared behind `Arc<dyn MarkDistribution<T>>`.
pub trait MarkDistribution<T>: std::fmt::Debug + Send + Sync {
    /// Draw one value, consuming randomness from `rng`.
    fn draw(&self, rng: &mut dyn RngCore) -> T;

    /// Density (or point mass, for atoms) at `x`.
    fn density(&self, x: T) -> f64;

    /// Draw `n` values in sequence.
    fn draw_n(&self, rng: &mut dyn RngCore, n: usize) -> Vec<T> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

impl<T, D> MarkDistribution<T> for std::sync::Arc<D>
where
    D: MarkDistribution<T> + ?Sized,
{
    fn draw(&self, rng: &mut dyn RngCore) -> T {
        (**self).draw(rng)
    }

    fn density(&self, x: T) -> f64 {
        (**self).density(x)
    }
}
