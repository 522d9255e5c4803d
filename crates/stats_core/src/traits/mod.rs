//! Core traits for generic numerical evaluation.
//!
//! This module defines the abstractions every statlib kernel is written
//! against:
//! - Generic floating-point operations (`Float` trait)
//! - Rectangular element containers (`Container` trait)

/// Generic floating-point trait for numeric computations.
///
/// Every kernel is generic over this bound so that the same code serves
/// `f32` and `f64`.
///
/// # Examples
/// ```
/// use stats_core::traits::Float;
///
/// fn rate_to_scale<T: Float>(rate: T) -> T {
///     rate.recip()
/// }
///
/// assert_eq!(rate_to_scale(4.0_f64), 0.25);
/// assert_eq!(rate_to_scale(4.0_f32), 0.25);
/// ```
pub use num_traits::Float;

mod container;

pub use container::Container;
