//! Closed-form distribution families.

use std::f64::consts::PI;

use popjump_core::{MarkDistribution, ValidationError};
use rand::RngCore;
use rand_distr::{Beta, Distribution, Uniform};

/// A closed-form one-dimensional law with an exact density.
///
/// The default value is the standard Uniform(0, 1), built fresh on each
/// call to [`Default::default`].
///
/// # Examples
///
/// ```
/// use popjump_core::MarkDistribution;
/// use popjump_sampling::Parametric;
///
/// let law = Parametric::uniform(0.0, 2.0).unwrap();
/// assert_eq!(law.density(1.0), 0.5);
/// assert_eq!(law.density(3.0), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Parametric {
    kind: Kind,
}

#[derive(Clone, Debug)]
enum Kind {
    Uniform {
        low: f64,
        high: f64,
        law: Uniform<f64>,
    },
    Beta {
        alpha: f64,
        beta: f64,
        ln_norm: f64,
        law: Beta<f64>,
    },
    Dirac(f64),
}

impl Parametric {
    /// Uniform law on `[low, high)`.
    pub fn uniform(low: f64, high: f64) -> Result<Self, ValidationError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ValidationError::InvalidParameter {
                name: "uniform",
                reason: format!("expected finite bounds with low < high, got [{low}, {high})"),
            });
        }
        Ok(Self {
            kind: Kind::Uniform {
                low,
                high,
                law: Uniform::new(low, high),
            },
        })
    }

    /// Beta(α, β) law on `[0, 1]`.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self, ValidationError> {
        let law = Beta::new(alpha, beta).map_err(|e| ValidationError::InvalidParameter {
            name: "beta",
            reason: format!("alpha={alpha}, beta={beta}: {e}"),
        })?;
        if !alpha.is_finite() || !beta.is_finite() {
            return Err(ValidationError::InvalidParameter {
                name: "beta",
                reason: format!("shape parameters must be finite, got {alpha}, {beta}"),
            });
        }
        Ok(Self {
            kind: Kind::Beta {
                alpha,
                beta,
                ln_norm: ln_gamma(alpha) + ln_gamma(beta) - ln_gamma(alpha + beta),
                law,
            },
        })
    }

    /// Point mass at `value`.
    pub fn dirac(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidParameter {
                name: "dirac",
                reason: format!("atom must be finite, got {value}"),
            });
        }
        Ok(Self {
            kind: Kind::Dirac(value),
        })
    }

    /// Mean of the law.
    pub fn mean(&self) -> f64 {
        match self.kind {
            Kind::Uniform { low, high, .. } => 0.5 * (low + high),
            Kind::Beta { alpha, beta, .. } => alpha / (alpha + beta),
            Kind::Dirac(v) => v,
        }
    }

    /// Smallest interval containing all the mass.
    pub fn support(&self) -> (f64, f64) {
        match self.kind {
            Kind::Uniform { low, high, .. } => (low, high),
            Kind::Beta { .. } => (0.0, 1.0),
            Kind::Dirac(v) => (v, v),
        }
    }
}

impl Default for Parametric {
    fn default() -> Self {
        Self {
            kind: Kind::Uniform {
                low: 0.0,
                high: 1.0,
                law: Uniform::new(0.0, 1.0),
            },
        }
    }
}

impl MarkDistribution<f64> for Parametric {
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        match &self.kind {
            Kind::Uniform { law, .. } => law.sample(rng),
            Kind::Beta { law, .. } => law.sample(rng),
            Kind::Dirac(v) => *v,
        }
    }

    /// Probability density; the point mass reports 1 at its atom.
    fn density(&self, x: f64) -> f64 {
        match self.kind {
            Kind::Uniform { low, high, .. } => {
                if (low..high).contains(&x) {
                    1.0 / (high - low)
                } else {
                    0.0
                }
            }
            Kind::Beta {
                alpha,
                beta,
                ln_norm,
                ..
            } => {
                if !(0.0..=1.0).contains(&x) {
                    return 0.0;
                }
                // powf keeps 0^0 = 1 at the boundary for unit shapes.
                x.powf(alpha - 1.0) * (1.0 - x).powf(beta - 1.0) * (-ln_norm).exp()
            }
            Kind::Dirac(v) => {
                if x == v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Lanczos coefficients (g = 7, n = 9).
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural logarithm of the gamma function for `x > 0`.
fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection keeps the series in its accurate range.
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, &c) in LANCZOS.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + 7.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use popjump_core::{integrate, QuadratureConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ln_gamma_matches_factorials() {
        // Γ(n) = (n-1)!
        let mut fact = 1.0f64;
        for n in 1..15 {
            if n > 1 {
                fact *= (n - 1) as f64;
            }
            assert!(
                (ln_gamma(n as f64) - fact.ln()).abs() < 1e-10,
                "ln Γ({n})"
            );
        }
        // Γ(1/2) = √π
        assert!((ln_gamma(0.5) - PI.sqrt().ln()).abs() < 1e-12);
    }

    #[test]
    fn default_is_standard_uniform() {
        let law = Parametric::default();
        assert_eq!(law.support(), (0.0, 1.0));
        assert_eq!(law.mean(), 0.5);
        assert_eq!(law.density(0.3), 1.0);
    }

    #[test]
    fn uniform_rejects_bad_bounds() {
        assert!(Parametric::uniform(1.0, 1.0).is_err());
        assert!(Parametric::uniform(2.0, 1.0).is_err());
        assert!(Parametric::uniform(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn uniform_draws_stay_in_support() {
        let law = Parametric::uniform(-1.0, 3.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for x in law.draw_n(&mut rng, 1_000) {
            assert!((-1.0..3.0).contains(&x));
        }
    }

    #[test]
    fn beta_density_integrates_to_one() {
        let law = Parametric::beta(2.5, 4.0).unwrap();
        let r = integrate(
            |x| law.density(x),
            0.0,
            1.0,
            &[],
            &QuadratureConfig::default(),
        );
        assert!((r.value - 1.0).abs() < 1e-8, "got {}", r.value);
    }

    #[test]
    fn beta_one_one_is_uniform() {
        let law = Parametric::beta(1.0, 1.0).unwrap();
        for x in [0.0, 0.25, 0.5, 1.0] {
            assert!((law.density(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn beta_rejects_non_positive_shapes() {
        assert!(Parametric::beta(0.0, 1.0).is_err());
        assert!(Parametric::beta(1.0, -2.0).is_err());
    }

    #[test]
    fn beta_sample_mean() {
        let law = Parametric::beta(2.0, 6.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let n = 20_000;
        let mean = law.draw_n(&mut rng, n).iter().sum::<f64>() / n as f64;
        assert!((mean - law.mean()).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn dirac_always_returns_atom() {
        let law = Parametric::dirac(0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(law.draw_n(&mut rng, 50).iter().all(|&x| x == 0.0));
        assert_eq!(law.density(0.0), 1.0);
        assert_eq!(law.density(0.1), 0.0);
        assert!(Parametric::dirac(f64::INFINITY).is_err());
    }
}
