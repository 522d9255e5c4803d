//! F variate generation as a ratio of scaled gamma draws.

use crate::gamma::standard_gamma;
use crate::rng::{default_seed, StatsRng};
use num_traits::Float;
use rand::Rng;

use super::valid_params;

/// Draw one F(`df1`, `df2`) variate.
///
/// Draws `X ~ Gamma(df1/2, 2)` then `Y ~ Gamma(df2/2, 2)` and returns
/// `(X / df1) / (Y / df2)`. A zero denominator draw gives `+∞`. Invalid
/// degrees of freedom return NaN without consuming randomness.
///
/// # Examples
///
/// ```
/// use stats_distributions::fdist::rf;
/// use stats_distributions::rng::StatsRng;
///
/// let mut rng = StatsRng::from_seed(42);
/// let x: f64 = rf(5.0, 20.0, &mut rng);
/// assert!(x > 0.0);
/// ```
pub fn rf<T, R>(df1: T, df2: T, rng: &mut R) -> T
where
    T: Float,
    R: Rng + ?Sized,
{
    if !valid_params(df1, df2) {
        return T::nan();
    }
    let two = T::one() + T::one();
    let x = two * standard_gamma(df1 / two, rng);
    let y = two * standard_gamma(df2 / two, rng);
    if y == T::zero() {
        return T::infinity();
    }
    (x / df1) / (y / df2)
}

/// Draw one F(`df1`, `df2`) variate from a transient engine.
///
/// `Some(seed)` seeds a fresh [`StatsRng`]; `None` takes a fresh seed from
/// [`default_seed`].
pub fn rf_seeded<T: Float>(df1: T, df2: T, seed: Option<u64>) -> T {
    let mut rng = StatsRng::from_seed(seed.unwrap_or_else(default_seed));
    rf(df1, df2, &mut rng)
}
