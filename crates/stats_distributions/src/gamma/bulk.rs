//! Buffer and container forms of the gamma kernels.

use crate::vectorize::{apply_into, fill_with, generate_container, map_container};
use num_traits::Float;
use rand::Rng;
use stats_core::traits::Container;
use stats_core::types::DistributionError;

use super::{dgamma, pgamma, qgamma, rgamma};

/// Gamma quantile of each probability in `probs`, written to `output`.
///
/// # Errors
///
/// `DistributionError::LengthMismatch` when the buffers differ in length;
/// nothing is written.
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::qgamma_into;
///
/// let probs = [0.0_f64, 0.5, 1.0];
/// let mut out = [0.0; 3];
/// qgamma_into(&probs, 2.0, 1.0, &mut out).unwrap();
/// assert_eq!(out[0], 0.0);
/// assert!(out[2].is_infinite());
/// ```
pub fn qgamma_into<T: Float>(
    probs: &[T],
    shape: T,
    scale: T,
    output: &mut [T],
) -> Result<(), DistributionError> {
    apply_into(probs, output, |p| qgamma(p, shape, scale))
}

/// Gamma quantile of each cell of `probs`, as a new container of the same shape.
pub fn qgamma_container<T, C>(probs: &C, shape: T, scale: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(probs, |p| qgamma(p, shape, scale))
}

/// Gamma density at each point of `xs`, written to `output`.
pub fn dgamma_into<T: Float>(
    xs: &[T],
    shape: T,
    scale: T,
    output: &mut [T],
) -> Result<(), DistributionError> {
    apply_into(xs, output, |x| dgamma(x, shape, scale))
}

/// Gamma density at each cell of `xs`.
pub fn dgamma_container<T, C>(xs: &C, shape: T, scale: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(xs, |x| dgamma(x, shape, scale))
}

/// Gamma CDF at each point of `xs`, written to `output`.
pub fn pgamma_into<T: Float>(
    xs: &[T],
    shape: T,
    scale: T,
    output: &mut [T],
) -> Result<(), DistributionError> {
    apply_into(xs, output, |x| pgamma(x, shape, scale))
}

/// Gamma CDF at each cell of `xs`.
pub fn pgamma_container<T, C>(xs: &C, shape: T, scale: T) -> C
where
    T: Float,
    C: Container<T>,
{
    map_container(xs, |x| pgamma(x, shape, scale))
}

/// Fill `output` with independent Gamma(`shape`, `scale`) variates drawn
/// in order from `rng`.
///
/// With invalid parameters every slot becomes NaN.
///
/// # Examples
///
/// ```
/// use stats_distributions::gamma::rgamma_into;
/// use stats_distributions::rng::StatsRng;
///
/// let mut rng = StatsRng::from_seed(1);
/// let mut out = vec![0.0_f64; 16];
/// rgamma_into(2.0, 1.0, &mut out, &mut rng);
/// assert!(out.iter().all(|&x| x > 0.0));
/// ```
pub fn rgamma_into<T, R>(shape: T, scale: T, output: &mut [T], rng: &mut R)
where
    T: Float,
    R: Rng + ?Sized,
{
    fill_with(output, || rgamma(shape, scale, rng));
}

/// A new `rows × cols` container of Gamma(`shape`, `scale`) variates.
///
/// Cells are drawn in the container's construction order (column-major
/// for [`DenseMatrix`](stats_core::types::DenseMatrix)).
///
/// # Panics
///
/// Panics when `C` cannot hold a `rows × cols` shape: `Vec<T>` is a column
/// vector and only accepts `cols == 1`.
///
/// # Examples
///
/// ```
/// use stats_core::types::DenseMatrix;
/// use stats_distributions::gamma::rgamma_matrix;
/// use stats_distributions::rng::StatsRng;
///
/// let mut rng = StatsRng::from_seed(1);
/// let m: DenseMatrix<f64> = rgamma_matrix(3, 4, 2.0, 1.0, &mut rng);
/// assert_eq!((m.rows(), m.cols()), (3, 4));
/// ```
pub fn rgamma_matrix<C, T, R>(rows: usize, cols: usize, shape: T, scale: T, rng: &mut R) -> C
where
    T: Float,
    C: Container<T>,
    R: Rng + ?Sized,
{
    generate_container(rows, cols, || rgamma(shape, scale, rng))
}
