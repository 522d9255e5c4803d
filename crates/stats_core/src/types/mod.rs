//! Core value and error types.
//!
//! This module provides:
//! - `error`: Structured error types for adapters, validation and solvers
//! - `matrix`: The owned column-major `DenseMatrix` container
//!
//! # Re-exports
//!
//! - [`DistributionError`], [`SolverError`] from `error`
//! - [`DenseMatrix`] from `matrix`

pub mod error;
pub mod matrix;

pub use error::{DistributionError, SolverError};
pub use matrix::DenseMatrix;
