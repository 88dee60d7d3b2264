//! Adaptive Gauss–Kronrod quadrature.
//!
//! Used to compute normalizing constants and means of unnormalized
//! densities. The integrator is globally adaptive: it keeps a heap of
//! segments ordered by error estimate, bisects the worst one, and stops
//! once the total error estimate is within tolerance or the evaluation
//! budget is spent. Each segment is integrated with the 15-point Kronrod
//! rule, using the embedded 7-point Gauss rule for the error estimate.
//!
//! Known discontinuities can be passed as breakpoints; the domain is
//! split there before refinement starts, so no segment straddles a jump.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Kronrod abscissae on `[-1, 1]`, non-negative half, descending.
/// Odd indices are the 7-point Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]`, `XGK[7]`.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Evaluations per segment.
const EVALS_PER_SEGMENT: usize = 15;

/// Tolerances and budget for [`integrate`].
///
/// Refinement stops once `error <= max(atol, rtol * |value|)` or when the
/// next bisection would exceed `max_evals` integrand evaluations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureConfig {
    /// Relative tolerance. Default: `sqrt(f64::EPSILON)` (about 1.49e-8).
    pub rtol: f64,
    /// Absolute tolerance. Default: 0.
    pub atol: f64,
    /// Maximum number of integrand evaluations. Default: 10^7.
    pub max_evals: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            rtol: f64::EPSILON.sqrt(),
            atol: 0.0,
            max_evals: 10_000_000,
        }
    }
}

/// Outcome of [`integrate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureResult {
    /// Estimated integral.
    pub value: f64,
    /// Estimated absolute error.
    pub error: f64,
    /// Number of integrand evaluations spent.
    pub evals: usize,
}

impl QuadratureResult {
    /// Whether the error estimate met the requested tolerance.
    pub fn converged(&self, config: &QuadratureConfig) -> bool {
        self.error <= config.atol.max(config.rtol * self.value.abs())
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

fn kronrod<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> Segment {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(center);
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for (j, (&x, &w)) in XGK[..7].iter().zip(&WGK[..7]).enumerate() {
        let dx = half * x;
        let pair = f(center - dx) + f(center + dx);
        kronrod += w * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    let value = kronrod * half;
    let error = ((kronrod - gauss) * half).abs();
    Segment {
        a,
        b,
        value,
        // A NaN estimate must be refined first, not silently accepted.
        error: if error.is_nan() { f64::INFINITY } else { error },
    }
}

/// Integrate `f` over `[a, b]`, splitting first at each of `breakpoints`
/// that lies strictly inside the interval.
///
/// Reversed bounds give the negated integral; equal bounds give zero.
///
/// # Examples
///
/// ```
/// use popjump_core::{integrate, QuadratureConfig};
///
/// let r = integrate(|x| x * x, 0.0, 3.0, &[], &QuadratureConfig::default());
/// assert!((r.value - 9.0).abs() < 1e-12);
/// ```
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    breakpoints: &[f64],
    config: &QuadratureConfig,
) -> QuadratureResult
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return QuadratureResult {
            value: 0.0,
            error: 0.0,
            evals: 0,
        };
    }
    if a > b {
        let r = integrate(f, b, a, breakpoints, config);
        return QuadratureResult {
            value: -r.value,
            ..r
        };
    }

    let mut knots: Vec<f64> = breakpoints
        .iter()
        .copied()
        .filter(|&p| p > a && p < b)
        .collect();
    knots.sort_by(f64::total_cmp);
    knots.dedup();

    let mut heap = BinaryHeap::new();
    let mut lo = a;
    for hi in knots.into_iter().chain(std::iter::once(b)) {
        heap.push(kronrod(&f, lo, hi));
        lo = hi;
    }
    let mut evals = heap.len() * EVALS_PER_SEGMENT;

    let (mut value, mut error) = totals(&heap);
    while error > config.atol.max(config.rtol * value.abs())
        && evals + 2 * EVALS_PER_SEGMENT <= config.max_evals
    {
        let Some(worst) = heap.pop() else { break };
        let mid = 0.5 * (worst.a + worst.b);
        // Segment too narrow to split in floating point.
        if mid <= worst.a || mid >= worst.b {
            heap.push(worst);
            break;
        }
        let left = kronrod(&f, worst.a, mid);
        let right = kronrod(&f, mid, worst.b);
        evals += 2 * EVALS_PER_SEGMENT;

        value += left.value + right.value - worst.value;
        error += left.error + right.error - worst.error;
        heap.push(left);
        heap.push(right);

        // Running sums drift; resynchronise when the estimate looks met.
        if error <= config.atol.max(config.rtol * value.abs()) || !error.is_finite() {
            (value, error) = totals(&heap);
        }
    }

    let (value, error) = totals(&heap);
    QuadratureResult {
        value,
        error,
        evals,
    }
}

fn totals(heap: &BinaryHeap<Segment>) -> (f64, f64) {
    heap.iter()
        .fold((0.0, 0.0), |(v, e), s| (v + s.value, e + s.error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg() -> QuadratureConfig {
        QuadratureConfig::default()
    }

    #[test]
    fn polynomial_exact() {
        let r = integrate(|x| 3.0 * x * x + 1.0, 0.0, 2.0, &[], &cfg());
        assert!((r.value - 10.0).abs() < 1e-12);
        assert!(r.converged(&cfg()));
        assert_eq!(r.evals, 15);
    }

    #[test]
    fn constant_on_unit_interval() {
        let r = integrate(|_| 1.0, 0.0, 1.0, &[], &cfg());
        assert!((r.value - 1.0).abs() < 1e-14);
    }

    #[test]
    fn reversed_bounds_negate() {
        let fwd = integrate(f64::exp, 0.0, 1.0, &[], &cfg());
        let rev = integrate(f64::exp, 1.0, 0.0, &[], &cfg());
        assert!((fwd.value + rev.value).abs() < 1e-14);
    }

    #[test]
    fn empty_interval_is_zero() {
        let r = integrate(|x| x, 0.5, 0.5, &[], &cfg());
        assert_eq!(r.value, 0.0);
        assert_eq!(r.evals, 0);
    }

    #[test]
    fn inverse_square_with_cutoff_breakpoint() {
        let eps = 1e-5;
        let f = |x: f64| if x < eps { 0.0 } else { 1.0 / (x * x) };
        let r = integrate(f, 0.0, 1.0, &[eps], &cfg());
        let expected = 1.0 / eps - 1.0;
        assert!(
            ((r.value - expected) / expected).abs() < 1e-6,
            "got {} expected {expected}",
            r.value
        );
    }

    #[test]
    fn inverse_with_cutoff_breakpoint() {
        let eps = 1e-5;
        let f = |x: f64| if x < eps { 0.0 } else { 1.0 / x };
        let r = integrate(f, 0.0, 1.0, &[eps], &cfg());
        assert!((r.value - (1.0 / eps).ln()).abs() < 1e-6);
    }

    #[test]
    fn breakpoints_outside_interval_are_ignored() {
        let r = integrate(|x| x, 0.0, 1.0, &[-1.0, 0.0, 1.0, 2.0], &cfg());
        assert!((r.value - 0.5).abs() < 1e-14);
        assert_eq!(r.evals, 15);
    }

    #[test]
    fn budget_is_respected() {
        let config = QuadratureConfig {
            max_evals: 45,
            ..cfg()
        };
        let r = integrate(|x| (1.0 / x).sin(), 1e-3, 1.0, &[], &config);
        assert!(r.evals <= 45);
    }

    proptest! {
        #[test]
        fn linear_integrals_are_exact(
            slope in -10.0f64..10.0,
            offset in -10.0f64..10.0,
            a in -5.0f64..5.0,
            width in 0.01f64..5.0,
        ) {
            let b = a + width;
            let r = integrate(|x| slope * x + offset, a, b, &[], &cfg());
            let exact = 0.5 * slope * (b * b - a * a) + offset * width;
            prop_assert!((r.value - exact).abs() < 1e-9 * (1.0 + exact.abs()));
        }
    }
}
