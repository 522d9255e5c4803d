//! Iteration configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Controls the Newton refinement behind the gamma and F quantile
/// functions: convergence tolerance on the relative change between
/// iterates and the maximum number of iterations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use stats_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the relative step.
    ///
    /// The solver stops when `|x_{n+1} - x_n| <= tolerance * |x_{n+1}|`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// When the limit is reached the last iterate is returned and flagged
    /// as not converged.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use stats_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-6) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
        }
    }
}

/// Configuration for series and continued-fraction evaluation.
///
/// Used by the incomplete gamma and incomplete beta primitives. A series
/// stops once the latest term is below `tolerance` relative to the running
/// sum; a continued fraction stops once the Lentz update factor is within
/// `tolerance` of one.
///
/// # Example
///
/// ```
/// use stats_core::math::solvers::SeriesConfig;
///
/// let config: SeriesConfig<f64> = SeriesConfig::default();
/// assert_eq!(config.tolerance, f64::EPSILON);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig<T: Float> {
    /// Relative tolerance for term (or update factor) magnitude.
    pub tolerance: T,
    /// Maximum number of terms.
    pub max_iterations: usize,
}

impl<T: Float> Default for SeriesConfig<T> {
    /// Machine epsilon of `T` and at most 1000 terms.
    fn default() -> Self {
        Self {
            tolerance: T::epsilon(),
            max_iterations: 1000,
        }
    }
}

/// Shape up to which a series runs on `max_iterations` alone.
const BUDGET_REFERENCE_SHAPE: f64 = 2500.0;

impl<T: Float> SeriesConfig<T> {
    /// Term budget for a series or continued fraction whose length grows
    /// like `√shape` (incomplete gamma near `x ≈ a`, incomplete beta near
    /// its mean).
    ///
    /// Equal to `max_iterations` for `shape <= 2500`, scaled by
    /// `⌈√(shape / 2500)⌉` above that.
    ///
    /// # Example
    ///
    /// ```
    /// use stats_core::math::solvers::SeriesConfig;
    ///
    /// let config: SeriesConfig<f64> = SeriesConfig::default();
    /// assert_eq!(config.term_budget(50.0), 1000);
    /// assert_eq!(config.term_budget(1e6), 20_000);
    /// ```
    pub fn term_budget(&self, shape: T) -> usize {
        let factor = (shape.to_f64().unwrap_or(f64::INFINITY) / BUDGET_REFERENCE_SHAPE)
            .sqrt()
            .ceil();
        if factor.is_nan() || factor <= 1.0 {
            return self.max_iterations;
        }
        // float-to-int casts saturate
        (self.max_iterations as f64 * factor) as usize
    }

    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}
