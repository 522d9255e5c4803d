//! Parameter checks shared by the distribution kernels.
//!
//! The scalar kernels use the boolean predicates and answer NaN on
//! failure. Callers that want a typed error up front (the CLI, for one)
//! use the `Result`-returning validators.

use num_traits::Float;
use stats_core::types::DistributionError;

/// `true` when `value` is finite and strictly positive.
#[inline]
pub fn is_positive_finite<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

/// `true` when `p` lies in `[0, 1]` (NaN is rejected).
#[inline]
pub fn is_probability<T: Float>(p: T) -> bool {
    p >= T::zero() && p <= T::one()
}

/// Require a finite, strictly positive distribution parameter.
///
/// # Examples
///
/// ```
/// use stats_distributions::validation::validate_positive;
///
/// assert!(validate_positive("shape", 2.0_f64).is_ok());
/// assert!(validate_positive("scale", 0.0_f64).is_err());
/// ```
pub fn validate_positive<T: Float>(name: &str, value: T) -> Result<(), DistributionError> {
    if is_positive_finite(value) {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter {
            name: name.to_string(),
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// Require a probability in `[0, 1]`.
pub fn validate_probability<T: Float>(p: T) -> Result<(), DistributionError> {
    if is_probability(p) {
        Ok(())
    } else {
        Err(DistributionError::InvalidProbability(
            p.to_f64().unwrap_or(f64::NAN),
        ))
    }
}
