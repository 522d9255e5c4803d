//! # stats_core: Numerical Foundation for statlib
//!
//! ## Layer 1 (Foundation) Role
//!
//! stats_core serves as the bottom layer of the statlib workspace, providing:
//! - Special-function primitives: log-gamma, regularised incomplete gamma and
//!   beta functions, the gamma density and the inverse standard normal
//!   (`math::special`)
//! - Root-finding configuration and a safeguarded Newton–Raphson solver
//!   (`math::solvers`)
//! - The `Float` bound and the `Container` capability trait (`traits`)
//! - Error types and the owned `DenseMatrix` container (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other statlib crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error enums
//! - tracing: Diagnostics on degraded-precision paths
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use stats_core::math::special::{reg_lower_gamma, reg_upper_gamma};
//!
//! // P(1, x) = 1 - exp(-x)
//! let p = reg_lower_gamma(1.0_f64, 2.0);
//! assert!((p - (1.0 - (-2.0_f64).exp())).abs() < 1e-14);
//!
//! // P + Q = 1
//! let q = reg_upper_gamma(1.0_f64, 2.0);
//! assert!((p + q - 1.0).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types and `DenseMatrix`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
