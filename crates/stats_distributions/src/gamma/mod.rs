//! Gamma distribution with shape `a` and scale `s`.
//!
//! Density `x^(a-1) e^(-x/s) / (Γ(a) s^a)` on `x >= 0`; mean `a s`,
//! variance `a s²`.
//!
//! ## Kernels
//!
//! - [`dgamma`]: density
//! - [`pgamma`]: CDF, `P(a, x / s)`
//! - [`qgamma`] / [`qgamma_with`]: quantile by safeguarded Newton inversion
//!   of the CDF
//! - [`rgamma`] / [`rgamma_seeded`]: variates by Marsaglia–Tsang
//!
//! ## Bulk adapters
//!
//! Buffer (`*_into`) and container (`*_container`, `rgamma_matrix`) forms
//! of each kernel, built on [`crate::vectorize`].
//!
//! Invalid parameters (non-positive or non-finite shape or scale) and
//! probabilities outside `[0, 1]` give NaN.

mod bulk;
mod quantile;
mod sampling;

pub use bulk::{
    dgamma_container, dgamma_into, pgamma_container, pgamma_into, qgamma_container, qgamma_into,
    rgamma_into, rgamma_matrix,
};
pub use quantile::{qgamma, qgamma_with};
pub use sampling::{rgamma, rgamma_seeded};

pub(crate) use sampling::standard_gamma;

use crate::validation::{is_positive_finite, validate_positive};
use num_traits::Float;
use stats_core::math::special::{gamma_density, reg_lower_gamma};
use stats_core::types::DistributionError;

/// Check gamma parameters up front, naming the offending one.
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::validate_gamma_params;
///
/// assert!(validate_gamma_params(2.0_f64, 1.0).is_ok());
/// assert!(validate_gamma_params(2.0_f64, -1.0).is_err());
/// ```
pub fn validate_gamma_params<T: Float>(shape: T, scale: T) -> Result<(), DistributionError> {
    validate_positive("shape", shape)?;
    validate_positive("scale", scale)
}

#[inline]
pub(crate) fn valid_params<T: Float>(shape: T, scale: T) -> bool {
    is_positive_finite(shape) && is_positive_finite(scale)
}

/// Gamma density at `x`.
///
/// - `x < 0` → 0
/// - `x == 0` → `+∞` for `shape < 1`, `1/scale` for `shape == 1`, 0 otherwise
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::dgamma;
///
/// // shape 1 is exponential with mean `scale`
/// let d = dgamma(1.0_f64, 1.0, 2.0);
/// assert!((d - 0.5 * (-0.5_f64).exp()).abs() < 1e-15);
/// ```
pub fn dgamma<T: Float>(x: T, shape: T, scale: T) -> T {
    if x.is_nan() || !valid_params(shape, scale) {
        return T::nan();
    }
    gamma_density(shape, x / scale) / scale
}

/// Gamma CDF, `P(X <= x)`.
///
/// `x <= 0` → 0, `x == +∞` → 1.
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::pgamma;
///
/// let p = pgamma(2.0_f64, 1.0, 2.0);
/// assert!((p - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
/// ```
pub fn pgamma<T: Float>(x: T, shape: T, scale: T) -> T {
    if x.is_nan() || !valid_params(shape, scale) {
        return T::nan();
    }
    if x <= T::zero() {
        return T::zero();
    }
    reg_lower_gamma(shape, x / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dgamma_scale() {
        // Gamma(2, 3): x e^(-x/3) / 9
        let x = 4.0_f64;
        assert_relative_eq!(dgamma(x, 2.0, 3.0), x * (-x / 3.0).exp() / 9.0, epsilon = 1e-15);
    }

    #[test]
    fn test_dgamma_at_zero() {
        assert_eq!(dgamma(0.0_f64, 0.5, 2.0), f64::INFINITY);
        assert_eq!(dgamma(0.0_f64, 1.0, 2.0), 0.5);
        assert_eq!(dgamma(0.0_f64, 3.0, 2.0), 0.0);
        assert_eq!(dgamma(-1.0_f64, 3.0, 2.0), 0.0);
    }

    #[test]
    fn test_pgamma_values() {
        assert_eq!(pgamma(0.0_f64, 2.0, 1.0), 0.0);
        assert_eq!(pgamma(-5.0_f64, 2.0, 1.0), 0.0);
        assert_eq!(pgamma(f64::INFINITY, 2.0, 1.0), 1.0);
        // Gamma(3, 2) median ≈ 5.348120627447
        assert_relative_eq!(pgamma(5.348_120_627_447_122_f64, 3.0, 2.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_params_give_nan() {
        assert!(dgamma(1.0_f64, 0.0, 1.0).is_nan());
        assert!(dgamma(1.0_f64, 1.0, f64::INFINITY).is_nan());
        assert!(pgamma(1.0_f64, -2.0, 1.0).is_nan());
        assert!(pgamma(f64::NAN, 2.0, 1.0).is_nan());
    }

    #[test]
    fn test_validate_names_parameter() {
        let err = validate_gamma_params(0.0_f64, 1.0).unwrap_err();
        assert!(err.to_string().contains("shape"));
        let err = validate_gamma_params(1.0_f64, f64::NAN).unwrap_err();
        assert!(err.to_string().contains("scale"));
    }
}
