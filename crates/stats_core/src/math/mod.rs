//! Numerical building blocks.
//!
//! - [`special`]: special functions underlying the gamma and F distributions
//! - [`solvers`]: iteration configuration and the Newton–Raphson root finder

pub mod solvers;
pub mod special;
