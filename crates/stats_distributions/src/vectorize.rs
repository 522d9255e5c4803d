//! Vectorisation adapters.
//!
//! Every scalar kernel in this crate is lifted to two bulk shapes by the
//! generic primitives here:
//!
//! - **Buffer form**: read a `&[T]`, write a caller-owned `&mut [T]` of the
//!   same length, element by element and in order ([`apply_into`]); or fill
//!   a buffer from a generator ([`fill_with`]).
//! - **Container form**: build a new container of the input's shape
//!   ([`map_container`]); or a fresh `rows × cols` container from a
//!   generator ([`generate_container`]).
//!
//! Domain errors stay per element (the kernels answer NaN), so a bad value
//! never aborts the rest of a batch. Only structural problems, such as
//! mismatched buffer lengths, are reported as errors.
//!
//! # Examples
//!
//! ```
//! use stats_core::types::DenseMatrix;
//! use stats_distributions::vectorize::{apply_into, map_container};
//!
//! let input = [1.0_f64, 4.0, 9.0];
//! let mut output = [0.0; 3];
//! apply_into(&input, &mut output, f64::sqrt).unwrap();
//! assert_eq!(output, [1.0, 2.0, 3.0]);
//!
//! let m = DenseMatrix::new(1, 2, vec![2.0_f64, 3.0]).unwrap();
//! let squared = map_container(&m, |x| x * x);
//! assert_eq!(squared.as_slice(), &[4.0, 9.0]);
//! ```

use stats_core::traits::Container;
use stats_core::types::DistributionError;

/// Apply `kernel` to each element of `input`, writing to `output`.
///
/// # Errors
///
/// `DistributionError::LengthMismatch` if the lengths differ; `output` is
/// left untouched in that case.
pub fn apply_into<T, F>(input: &[T], output: &mut [T], mut kernel: F) -> Result<(), DistributionError>
where
    T: Copy,
    F: FnMut(T) -> T,
{
    check_lengths(input.len(), output.len())?;
    for (out, &x) in output.iter_mut().zip(input) {
        *out = kernel(x);
    }
    Ok(())
}

/// Fill every slot of `output` with successive values of `draw`.
pub fn fill_with<T, F>(output: &mut [T], mut draw: F)
where
    F: FnMut() -> T,
{
    for slot in output.iter_mut() {
        *slot = draw();
    }
}

/// A new container of `input`'s shape with `kernel` applied to every cell.
///
/// The input is not modified; each cell is visited exactly once.
pub fn map_container<T, C, F>(input: &C, mut kernel: F) -> C
where
    T: Copy,
    C: Container<T>,
    F: FnMut(T) -> T,
{
    C::from_fn(input.rows(), input.cols(), |r, c| kernel(input.get(r, c)))
}

/// A new `rows × cols` container filled from `draw`, in the container's
/// construction order.
///
/// # Panics
///
/// Panics when `C` cannot hold the requested shape, e.g. `Vec<T>` with
/// `cols != 1`.
pub fn generate_container<T, C, F>(rows: usize, cols: usize, mut draw: F) -> C
where
    T: Copy,
    C: Container<T>,
    F: FnMut() -> T,
{
    C::from_fn(rows, cols, |_, _| draw())
}

#[inline]
pub(crate) fn check_lengths(input: usize, output: usize) -> Result<(), DistributionError> {
    if input == output {
        Ok(())
    } else {
        Err(DistributionError::LengthMismatch { input, output })
    }
}
