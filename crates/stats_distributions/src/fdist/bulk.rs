//! Buffer and container forms of the F kernels.

use crate::vectorize::{apply_into, fill_with, generate_container, map_container};
use num_traits::Float;
use rand::Rng;
use stats_core::traits::Container;
use stats_core::types::DistributionError;

use super::{df, pf, qf, rf};

/// F quantile of each probability in `probs`, written to `output`.
///
/// # Errors
///
/// `DistributionError::LengthMismatch` when the buffers differ in length.
pub fn qf_into<T: Float>(
    probs: &[T],
    df1: T,
    df2: T,
    output: &mut [T],
) -> Result<(), DistributionError> {
    apply_into(probs, output, |p| qf(p, df1, df2))
}

/// F quantile of each cell of `probs`.
pub fn qf_container<T, C>(probs: &C, df1: T, df2: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(probs, |p| qf(p, df1, df2))
}

/// F density at each point of `xs`, written to `output`.
pub fn df_into<T: Float>(xs: &[T], df1: T, df2: T, output: &mut [T]) -> Result<(), DistributionError> {
    apply_into(xs, output, |x| df(x, df1, df2))
}

/// F density at each cell of `xs`.
pub fn df_container<T, C>(xs: &C, df1: T, df2: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(xs, |x| df(x, df1, df2))
}

/// F CDF at each point of `xs`, written to `output`.
pub fn pf_into<T: Float>(xs: &[T], df1: T, df2: T, output: &mut [T]) -> Result<(), DistributionError> {
    apply_into(xs, output, |x| pf(x, df1, df2))
}

/// F CDF at each cell of `xs`.
pub fn pf_container<T, C>(xs: &C, df1: T, df2: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(xs, |x| pf(x, df1, df2))
}

/// Fill `output` with independent F(`df1`, `df2`) variates drawn in order
/// from `rng`.
///
/// # Examples
///
/// ```
/// use stats_distributions::fdist::rf_into;
/// use stats_distributions::rng::StatsRng;
///
/// let mut rng = StatsRng::from_seed(3);
/// let mut out = [0.0_f64; 8];
/// rf_into(5.0, 20.0, &mut out, &mut rng);
/// assert!(out.iter().all(|&x| x >= 0.0));
/// ```
pub fn rf_into<T, R>(df1: T, df2: T, output: &mut [T], rng: &mut R)
where
    T: Float,
    R: Rng + ?Sized,
{
    fill_with(output, || rf(df1, df2, rng));
}

/// A new `rows × cols` container of F(`df1`, `df2`) variates.
///
/// # Panics
///
/// Panics when `C` cannot hold a `rows × cols` shape (`Vec<T>` with
/// `cols != 1`).
pub fn rf_matrix<C, T, R>(rows: usize, cols: usize, df1: T, df2: T, rng: &mut R) -> C
where
    T: Float,
    C: Container<T>,
    R: Rng + ?Sized,
{
    generate_container(rows, cols, || rf(df1, df2, rng))
}
