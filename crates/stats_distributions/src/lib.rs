//! # stats_distributions: Gamma and F Distribution Kernels
//!
//! ## Layer 2 (Distributions) Role
//!
//! stats_distributions builds on stats_core (Layer 1) and provides:
//! - Gamma distribution kernels: density, CDF, quantile, variates (`gamma`)
//! - F distribution kernels composed from gamma draws and the incomplete
//!   beta function (`fdist`)
//! - Seeded random engines (`rng`)
//! - Generic vectorisation adapters for slices and containers (`vectorize`)
//! - Rayon-backed parallel bulk adapters (`parallel`)
//! - Parameter validation helpers (`validation`)
//!
//! ## Evaluation Shapes
//!
//! Every kernel is available as
//! - a scalar function (`qgamma`, `rgamma`, `rf`, ...),
//! - a buffer function writing into a caller-owned slice (`qgamma_into`,
//!   `rgamma_into`, ...),
//! - a container function returning a new container of the same shape
//!   (`qgamma_container`, `rgamma_matrix`, ...).
//!
//! All kernels are generic over `T: Float` (`f32`, `f64`). Domain errors
//! yield NaN per element; only structural errors (mismatched buffer
//! lengths) are returned as `Err`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use stats_core::types::DenseMatrix;
//! use stats_distributions::gamma::{pgamma, qgamma, qgamma_container, rgamma};
//! use stats_distributions::fdist::rf;
//! use stats_distributions::rng::StatsRng;
//!
//! let x = qgamma(0.9_f64, 3.0, 2.0);
//! assert!((pgamma(x, 3.0, 2.0) - 0.9).abs() < 1e-10);
//!
//! let probs = DenseMatrix::new(2, 2, vec![0.1_f64, 0.2, 0.3, 0.4]).unwrap();
//! let quantiles = qgamma_container(&probs, 3.0, 2.0);
//! assert_eq!((quantiles.rows(), quantiles.cols()), (2, 2));
//!
//! let mut rng = StatsRng::from_seed(42);
//! let g: f64 = rgamma(3.0, 2.0, &mut rng);
//! let f: f64 = rf(5.0, 20.0, &mut rng);
//! assert!(g > 0.0 && f > 0.0);
//! ```

#![warn(missing_docs)]

pub mod fdist;
pub mod gamma;
pub mod parallel;
pub mod rng;
pub mod validation;
pub mod vectorize;

pub use stats_core::traits::Container;
pub use stats_core::types::{DenseMatrix, DistributionError};
