//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Structural errors from adapters, containers and
//!   parameter validation
//! - `SolverError`: Errors from strict use of the root-finding solver
//!
//! Domain errors inside the scalar kernels (a probability outside `[0, 1]`,
//! a non-positive shape) are *not* reported through these types; the
//! kernels return NaN so that bulk evaluation carries on element by
//! element.

use thiserror::Error;

/// Structural errors raised by statlib adapters and validators.
///
/// # Variants
/// - `InvalidParameter`: A distribution parameter is non-positive or non-finite
/// - `InvalidProbability`: A probability lies outside `[0, 1]`
/// - `LengthMismatch`: Input and output buffers differ in length
/// - `ShapeMismatch`: Matrix data does not match its declared shape
///
/// # Examples
/// ```
/// use stats_core::types::DistributionError;
///
/// let err = DistributionError::LengthMismatch { input: 4, output: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Buffer length mismatch: input has 4 elements, output has 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// A distribution parameter is non-positive or non-finite.
    #[error("Invalid parameter {name} = {value}: must be finite and > 0")]
    InvalidParameter {
        /// Parameter name (e.g. `shape`, `df2`)
        name: String,
        /// Offending value
        value: f64,
    },

    /// A probability argument lies outside `[0, 1]`.
    #[error("Invalid probability {0}: must lie in [0, 1]")]
    InvalidProbability(f64),

    /// Input and output buffers differ in length.
    #[error("Buffer length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch {
        /// Input length
        input: usize,
        /// Output length
        output: usize,
    },

    /// Matrix storage does not match `rows * cols`.
    #[error("Shape mismatch: {rows}x{cols} matrix cannot hold {len} elements")]
    ShapeMismatch {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
        /// Length of supplied storage
        len: usize,
    },
}

/// Root-finding solver errors.
///
/// Only produced when a caller opts into strict convergence through
/// [`NewtonResult::into_result`](crate::math::solvers::NewtonResult::into_result).
///
/// # Examples
/// ```
/// use stats_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },
}
