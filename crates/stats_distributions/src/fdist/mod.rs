//! F distribution with `df1` numerator and `df2` denominator degrees of freedom.
//!
//! `F = (X / df1) / (Y / df2)` for independent `X ~ χ²(df1)`,
//! `Y ~ χ²(df2)`. Its CDF is an incomplete beta function:
//!
//! ```text
//! P(F <= x) = I_y(df1/2, df2/2),   y = df1·x / (df1·x + df2)
//! ```
//!
//! ## Kernels
//!
//! - [`df`]: density
//! - [`pf`]: CDF
//! - [`qf`] / [`qf_with`]: quantile via the inverse incomplete beta function
//! - [`rf`] / [`rf_seeded`]: variates as a ratio of two gamma draws

mod bulk;
mod sampling;

pub use bulk::{
    df_container, df_into, pf_container, pf_into, qf_container, qf_into, rf_into, rf_matrix,
};
pub use sampling::{rf, rf_seeded};

use crate::validation::{is_positive_finite, is_probability, validate_positive};
use num_traits::Float;
use stats_core::math::solvers::SolverConfig;
use stats_core::math::special::{inv_reg_incomplete_beta_with, ln_beta, reg_incomplete_beta};
use stats_core::types::DistributionError;

/// Check F parameters up front, naming the offending one.
pub fn validate_f_params<T: Float>(df1: T, df2: T) -> Result<(), DistributionError> {
    validate_positive("df1", df1)?;
    validate_positive("df2", df2)
}

#[inline]
pub(crate) fn valid_params<T: Float>(df1: T, df2: T) -> bool {
    is_positive_finite(df1) && is_positive_finite(df2)
}

/// F density at `x`.
///
/// Evaluated in log space. `x < 0` → 0; at `x == 0` the density is `+∞`
/// for `df1 < 2`, 1 for `df1 == 2` and 0 for `df1 > 2`.
///
/// # Examples
///
/// ```
/// use stats_distributions::fdist::df;
///
/// // F(2, 2): density 1 / (1 + x)²
/// assert!((df(1.0_f64, 2.0, 2.0) - 0.25).abs() < 1e-14);
/// ```
pub fn df<T: Float>(x: T, df1: T, df2: T) -> T {
    if x.is_nan() || !valid_params(df1, df2) {
        return T::nan();
    }
    if x < T::zero() || x.is_infinite() {
        return T::zero();
    }

    let two = T::one() + T::one();
    if x == T::zero() {
        return if df1 < two {
            T::infinity()
        } else if df1 == two {
            T::one()
        } else {
            T::zero()
        };
    }

    let half_d1 = df1 / two;
    let half_d2 = df2 / two;
    let ln_density = half_d1 * (df1 / df2).ln() + (half_d1 - T::one()) * x.ln()
        - (half_d1 + half_d2) * (df1 * x / df2).ln_1p()
        - ln_beta(half_d1, half_d2);
    ln_density.exp()
}

/// F cumulative distribution function, `P(F <= x)`.
///
/// `x <= 0` → 0, `x == +∞` → 1.
///
/// # Examples
///
/// ```
/// use stats_distributions::fdist::pf;
///
/// // F(2, 2): CDF x / (1 + x)
/// assert!((pf(3.0_f64, 2.0, 2.0) - 0.75).abs() < 1e-14);
/// ```
pub fn pf<T: Float>(x: T, df1: T, df2: T) -> T {
    if x.is_nan() || !valid_params(df1, df2) {
        return T::nan();
    }
    if x <= T::zero() {
        return T::zero();
    }
    if x.is_infinite() {
        return T::one();
    }
    let two = T::one() + T::one();
    let denominator = df1 * x + df2;
    let y = df1 * x / denominator;
    if y <= T::one() / two {
        reg_incomplete_beta(df1 / two, df2 / two, y)
    } else {
        // upper tail through 1 - y = df2 / (df1·x + df2), formed without cancellation
        T::one() - reg_incomplete_beta(df2 / two, df1 / two, df2 / denominator)
    }
}

/// F quantile at probability `p`.
///
/// Uses the default [`SolverConfig`].
///
/// - `p == 0` → 0, `p == 1` → `+∞`
/// - `p` outside `[0, 1]`, NaN or invalid degrees of freedom → NaN
///
/// # Examples
///
/// ```
/// use stats_distributions::fdist::{pf, qf};
///
/// let x = qf(0.95_f64, 5.0, 20.0);
/// assert!((pf(x, 5.0, 20.0) - 0.95).abs() < 1e-9);
///
/// assert_eq!(qf(1.0_f64, 5.0, 20.0), f64::INFINITY);
/// ```
pub fn qf<T: Float>(p: T, df1: T, df2: T) -> T {
    qf_with(p, df1, df2, &SolverConfig::default())
}

/// [`qf`] with an explicit solver configuration.
pub fn qf_with<T: Float>(p: T, df1: T, df2: T, config: &SolverConfig<T>) -> T {
    if !is_probability(p) || !valid_params(df1, df2) {
        return T::nan();
    }
    if p == T::zero() {
        return T::zero();
    }
    if p == T::one() {
        return T::infinity();
    }

    let two = T::one() + T::one();
    if p <= T::one() / two {
        let y = inv_reg_incomplete_beta_with(df1 / two, df2 / two, p, config);
        df2 * y / (df1 * (T::one() - y))
    } else {
        // solve for w = 1 - y in the mirrored beta so w keeps its precision
        let w = inv_reg_incomplete_beta_with(df2 / two, df1 / two, T::one() - p, config);
        if w <= T::zero() {
            return T::infinity();
        }
        df2 * (T::one() - w) / (df1 * w)
    }
}
