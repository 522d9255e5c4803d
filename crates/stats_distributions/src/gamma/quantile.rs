//! Gamma quantile by inversion of the regularised incomplete gamma function.
//!
//! # Algorithm
//!
//! 1. Seed. For `shape >= 1` the Wilson–Hilferty cube-root normal
//!    approximation `a (1 - 1/(9a) + z/(3√a))³` with `z = Φ⁻¹(p)`. For
//!    smaller shapes, or when that cube base is not positive, the small-shape
//!    seed with `t = 1 - a (0.253 + 0.12 a)`: `(p/t)^(1/a)` below `t`,
//!    `1 - ln(1 - (p - t)/(1 - t))` above.
//! 2. Refine with [`NewtonRaphsonSolver::solve_positive`]: the density is the
//!    derivative, steps are halved to stay positive and inside the sign
//!    bracket, bisection takes over when Newton is unusable.
//!
//! For `p >= 0.5` the residual is formed from the upper tail as
//! `(1 - p) - Q(a, x)`, so quantiles near `p = 1` do not lose their
//! significant digits to `1 - P`.

use crate::validation::is_probability;
use num_traits::Float;
use stats_core::math::solvers::{NewtonRaphsonSolver, SeriesConfig, SolverConfig};
use stats_core::math::special::{incomplete_gamma_pair, ln_gamma, norm_quantile};

use super::valid_params;

/// Quantile of Gamma(`shape`, `scale`) at probability `p`.
///
/// Uses the default [`SolverConfig`] (relative tolerance `1e-10`, at most
/// 100 iterations).
///
/// # Edge Cases
///
/// - `p == 0` → 0, `p == 1` → `+∞`
/// - `p` outside `[0, 1]`, NaN, or invalid `shape`/`scale` → NaN
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::{pgamma, qgamma};
///
/// let x = qgamma(0.95_f64, 3.0, 2.0);
/// assert!((pgamma(x, 3.0, 2.0) - 0.95).abs() < 1e-10);
///
/// assert_eq!(qgamma(0.0_f64, 3.0, 2.0), 0.0);
/// assert_eq!(qgamma(1.0_f64, 3.0, 2.0), f64::INFINITY);
/// assert!(qgamma(1.5_f64, 3.0, 2.0).is_nan());
/// ```
pub fn qgamma<T: Float>(p: T, shape: T, scale: T) -> T {
    qgamma_with(p, shape, scale, &SolverConfig::default())
}

/// [`qgamma`] with an explicit solver configuration.
///
/// Exhausting `config.max_iterations` is not an error: the last iterate is
/// returned and a `debug` event is logged.
pub fn qgamma_with<T: Float>(p: T, shape: T, scale: T, config: &SolverConfig<T>) -> T {
    if !is_probability(p) || !valid_params(shape, scale) {
        return T::nan();
    }
    if p == T::zero() {
        return T::zero();
    }
    if p == T::one() {
        return T::infinity();
    }
    standard_quantile(p, shape, config) * scale
}

/// Quantile of the unit-scale gamma distribution for `0 < p < 1`.
fn standard_quantile<T: Float>(p: T, a: T, config: &SolverConfig<T>) -> T {
    let seed = initial_guess(p, a);
    if seed == T::zero() {
        // Below the smallest positive value of T.
        return T::zero();
    }

    let half = T::from(0.5).unwrap();
    let q = T::one() - p;
    let upper_tail = p >= half;
    let series = SeriesConfig::default();
    let ln_gamma_a = ln_gamma(a);

    let residual = |x: T| {
        let (lower, upper) = incomplete_gamma_pair(a, x, &series);
        if upper_tail {
            q - upper
        } else {
            lower - p
        }
    };
    let density = |x: T| ((a - T::one()) * x.ln() - x - ln_gamma_a).exp();

    let result = NewtonRaphsonSolver::new(*config).solve_positive(residual, density, seed);
    if !result.converged {
        tracing::debug!(
            p = p.to_f64().unwrap_or(f64::NAN),
            shape = a.to_f64().unwrap_or(f64::NAN),
            iterations = result.iterations,
            root = result.root.to_f64().unwrap_or(f64::NAN),
            "gamma quantile did not converge; returning last iterate"
        );
    }
    result.root
}

/// Starting point for the Newton refinement.
fn initial_guess<T: Float>(p: T, a: T) -> T {
    let one = T::one();

    if a >= one {
        let z = norm_quantile(p);
        let nine: T = T::from(9.0).unwrap();
        let three: T = T::from(3.0).unwrap();
        let base = one - (nine * a).recip() + z / (three * a.sqrt());
        if base > T::zero() {
            let guess = a * base * base * base;
            if guess.is_finite() && guess > T::zero() {
                return guess;
            }
        }
    }

    let t = one - a * (T::from(0.253).unwrap() + T::from(0.12).unwrap() * a);
    if p < t {
        (p / t).powf(a.recip())
    } else {
        one - (one - (p - t) / (one - t)).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamma::pgamma;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_closed_form() {
        // shape 1: q = -scale ln(1 - p)
        for &p in &[1e-9, 0.01, 0.3, 0.5, 0.9, 0.999_999] {
            let expected = -2.5 * (1.0_f64 - p).ln();
            assert_relative_eq!(qgamma(p, 1.0, 2.5), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_chi_square_reference_values() {
        // χ²(k) = Gamma(k/2, 2); χ²(2) 95% point = 5.991464547107979
        assert_relative_eq!(qgamma(0.95_f64, 1.0, 2.0), 5.991_464_547_107_979, max_relative = 1e-9);
        // χ²(10) 5% point = 3.940299136119247
        assert_relative_eq!(qgamma(0.05_f64, 5.0, 2.0), 3.940_299_136_119_247, max_relative = 1e-9);
        // χ²(1) 99% point = 6.634896601021214
        assert_relative_eq!(qgamma(0.99_f64, 0.5, 2.0), 6.634_896_601_021_214, max_relative = 1e-9);
    }

    #[test]
    fn test_round_trip_across_regimes() {
        let shapes = [0.001, 0.01, 0.1, 0.5, 0.99, 1.0, 2.5, 10.0, 150.0, 1e4];
        let probs = [1e-8, 1e-4, 0.05, 0.5, 0.95, 0.9999];
        for &a in &shapes {
            for &p in &probs {
                let x = qgamma(p, a, 1.0);
                assert!(x.is_finite() && x >= 0.0, "qgamma({}, {}) = {}", p, a, x);
                if x > 0.0 {
                    assert_relative_eq!(pgamma(x, a, 1.0), p, max_relative = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_at_large_shapes() {
        let probs = [1e-8, 1e-4, 0.05, 0.3, 0.5, 0.7, 0.95, 0.9999];
        for &a in &[1e5_f64, 1e6, 1e7] {
            for &p in &probs {
                let x = qgamma(p, a, 1.0);
                assert_relative_eq!(pgamma(x, a, 1.0), p, max_relative = 1e-6);
            }
            // median ≈ a - 1/3
            assert_relative_eq!(qgamma(0.5, a, 1.0), a - 1.0 / 3.0, epsilon = 1e-3);
            assert!(qgamma(0.3, a, 1.0) < a);
        }
    }

    #[test]
    fn test_upper_tail_precision() {
        // Q(1, x) = e^-x, so p = 1 - 1e-12 gives x = 12 ln 10
        let x = qgamma(1.0 - 1e-12_f64, 1.0, 1.0);
        assert_relative_eq!(x, 12.0 * 10.0_f64.ln(), max_relative = 1e-4);
    }

    #[test]
    fn test_boundaries_and_domain() {
        assert_eq!(qgamma(0.0_f64, 2.0, 1.0), 0.0);
        assert_eq!(qgamma(1.0_f64, 2.0, 1.0), f64::INFINITY);
        assert!(qgamma(-0.1_f64, 2.0, 1.0).is_nan());
        assert!(qgamma(1.1_f64, 2.0, 1.0).is_nan());
        assert!(qgamma(0.5_f64, -1.0, 1.0).is_nan());
        assert!(qgamma(0.5_f64, 1.0, 0.0).is_nan());
        assert!(qgamma(f64::NAN, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_tiny_shape_underflow_is_zero() {
        // (1e-10)^(1/0.001) underflows
        assert_eq!(qgamma(1e-10_f64, 0.001, 1.0), 0.0);
    }

    #[test]
    fn test_iteration_cap_returns_last_iterate() {
        let config = SolverConfig::new(1e-300, 1);
        let x = qgamma_with(0.3_f64, 4.0, 1.0, &config);
        assert!(x.is_finite() && x > 0.0);
    }

    #[test]
    fn test_seeds_positive() {
        for &a in &[0.05_f64, 0.7, 1.0, 3.0, 40.0] {
            for &p in &[1e-6, 0.2, 0.8, 1.0 - 1e-9] {
                let seed = initial_guess(p, a);
                assert!(seed > 0.0 && seed.is_finite(), "seed({}, {}) = {}", p, a, seed);
            }
        }
    }

    #[test]
    fn test_f32_quantile() {
        let x32 = qgamma(0.7_f32, 2.0, 1.5);
        let x64 = qgamma(0.7_f64, 2.0, 1.5);
        assert_relative_eq!(x32 as f64, x64, max_relative = 1e-5);
    }
}
