//! Special functions behind the gamma and F distributions.
//!
//! This module provides:
//! - [`gamma`]: log-gamma, regularised incomplete gamma `P`/`Q`, gamma density
//! - [`beta`]: regularised incomplete beta `I_x(a, b)` and its inverse
//! - [`normal`]: standard normal CDF, density and quantile
//!
//! Every function is generic over `T: Float` and returns NaN for arguments
//! outside its domain instead of panicking or erroring. Iterative
//! evaluation never fails: when a series or continued fraction exhausts
//! its [`SeriesConfig`](crate::math::solvers::SeriesConfig) budget the best
//! partial value is returned and a `tracing` event is emitted.

pub mod beta;
pub mod gamma;
pub mod normal;

pub use beta::{
    inv_reg_incomplete_beta, inv_reg_incomplete_beta_with, ln_beta, reg_incomplete_beta,
    reg_incomplete_beta_with,
};
pub use gamma::{
    gamma_density, incomplete_gamma_pair, ln_gamma, reg_lower_gamma, reg_lower_gamma_with,
    reg_upper_gamma, reg_upper_gamma_with,
};
pub use normal::{norm_cdf, norm_pdf, norm_quantile};

use num_traits::Float;

/// Convert an `f64` constant into `T`.
#[inline]
pub(crate) fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}

/// Lossy view of a `T` for diagnostics.
#[inline]
pub(crate) fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Smallest magnitude allowed for Lentz denominators.
#[inline]
pub(crate) fn lentz_floor<T: Float>() -> T {
    T::min_positive_value() / T::epsilon()
}
