//! Gamma variate generation.
//!
//! # Algorithm
//!
//! Marsaglia & Tsang (2000), "A Simple Method for Generating Gamma
//! Variables", ACM TOMS 26(3):
//!
//! - `shape >= 1`: `d = a - 1/3`, `c = 1/√(9d)`. Draw `z ~ N(0, 1)` until
//!   `v = (1 + c z)³ > 0`, then `u ~ U[0, 1)`. Accept `d v` when
//!   `u < 1 - 0.0331 z⁴` (squeeze) or `ln u < z²/2 + d (1 - v + ln v)`;
//!   otherwise draw a fresh pair.
//! - `0 < shape < 1`: draw `g ~ Gamma(shape + 1)`, then `u ∈ (0, 1]`, and
//!   return `g · u^(1/shape)`.
//!
//! Draw order is fixed, so a given engine state always yields the same
//! variate.

use crate::rng::{default_seed, StatsRng};
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::valid_params;

/// Draw one Gamma(`shape`, `scale`) variate.
///
/// Invalid parameters return NaN without consuming any randomness.
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::rgamma;
/// use stats_distributions::rng::StatsRng;
///
/// let mut rng = StatsRng::from_seed(42);
/// let x: f64 = rgamma(3.0, 2.0, &mut rng);
/// assert!(x > 0.0);
///
/// let mut rng1 = StatsRng::from_seed(7);
/// let mut rng2 = StatsRng::from_seed(7);
/// assert_eq!(rgamma(0.4_f64, 1.0, &mut rng1), rgamma(0.4_f64, 1.0, &mut rng2));
/// ```
pub fn rgamma<T, R>(shape: T, scale: T, rng: &mut R) -> T
where
    T: Float,
    R: Rng + ?Sized,
{
    if !valid_params(shape, scale) {
        return T::nan();
    }
    standard_gamma(shape, rng) * scale
}

/// Draw one Gamma(`shape`, `scale`) variate from a transient engine.
///
/// `Some(seed)` seeds a fresh [`StatsRng`]; `None` takes a fresh seed from
/// [`default_seed`]. The engine is dropped after the call.
pub fn rgamma_seeded<T: Float>(shape: T, scale: T, seed: Option<u64>) -> T {
    let mut rng = StatsRng::from_seed(seed.unwrap_or_else(default_seed));
    rgamma(shape, scale, &mut rng)
}

/// Unit-scale gamma variate for a valid `shape`.
pub(crate) fn standard_gamma<T, R>(shape: T, rng: &mut R) -> T
where
    T: Float,
    R: Rng + ?Sized,
{
    if shape < T::one() {
        let g = marsaglia_tsang(shape + T::one(), rng);
        // (0, 1]
        let u = 1.0 - rng.gen::<f64>();
        return g * to_float::<T>(u).powf(shape.recip());
    }
    marsaglia_tsang(shape, rng)
}

fn marsaglia_tsang<T, R>(shape: T, rng: &mut R) -> T
where
    T: Float,
    R: Rng + ?Sized,
{
    let one = T::one();
    let d = shape - to_float(1.0 / 3.0);
    let c = (to_float::<T>(9.0) * d).sqrt().recip();
    let squeeze: T = to_float(0.0331);
    let half: T = to_float(0.5);

    loop {
        let (z, v) = loop {
            let z: T = to_float(StandardNormal.sample(rng));
            let v = one + c * z;
            if v > T::zero() {
                break (z, v * v * v);
            }
        };

        let u: T = to_float(rng.gen::<f64>());
        let z2 = z * z;
        if u < one - squeeze * z2 * z2 {
            return d * v;
        }
        if u.ln() < half * z2 + d * (one - v + v.ln()) {
            return d * v;
        }
    }
}

#[inline]
fn to_float<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}
