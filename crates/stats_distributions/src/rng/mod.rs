//! # Random Number Generation Infrastructure
//!
//! This module provides the random engine used by the samplers.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every engine is seeded; equal seeds give
//!   bitwise-identical variate sequences
//! - **No hidden global state**: a fresh seed comes from [`default_seed`],
//!   called explicitly whenever a transient engine is built
//! - **Interoperability**: [`StatsRng`] implements `rand::RngCore`, so the
//!   samplers accept it or any other `rand::Rng` the caller owns
//!
//! ## Module Structure
//!
//! - [`prng`]: `StdRng` wrapper with seed tracking, entropy seeding and
//!   per-stream seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use stats_distributions::rng::StatsRng;
//!
//! let mut rng = StatsRng::from_seed(12345);
//!
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

pub mod prng;

pub use prng::{default_seed, derive_stream_seed, StatsRng};
