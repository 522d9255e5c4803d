//! Safeguarded Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Upper bound on step halvings within a single Newton iteration.
const MAX_STEP_HALVINGS: usize = 64;

/// Outcome of a Newton-Raphson solve.
///
/// Non-convergence is not an error at this level: `root` always holds the
/// best available iterate, and `converged` records whether the tolerance
/// was met. Callers wanting a hard failure use [`NewtonResult::into_result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult<T> {
    /// Final iterate.
    pub root: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the relative-step tolerance was met.
    pub converged: bool,
}

impl<T: Float> NewtonResult<T> {
    /// Convert to a `Result`, treating non-convergence as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use stats_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let result = solver.solve_positive(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
    /// let root = result.into_result().unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn into_result(self) -> Result<T, SolverError> {
        if self.converged {
            Ok(self.root)
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: self.iterations,
            })
        }
    }
}

/// Newton-Raphson root finder for non-decreasing functions on an interval.
///
/// Uses Newton's method `x_{n+1} = x_n - f(x_n) / f'(x_n)`, guarded so that
/// every iterate stays strictly inside a sign bracket `(lo, hi)`:
///
/// - the bracket starts as the caller's domain and shrinks with each
///   residual evaluation (`f(x) > 0` moves `hi`, otherwise `lo`);
/// - a step that would leave the bracket is halved until it lands inside;
/// - an unusable derivative (zero, negative or non-finite) falls back to
///   bisection, or to doubling while the upper end is unbounded.
///
/// The function must be non-decreasing over the domain, as a CDF residual
/// `F(x) - p` is.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use stats_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 on (0, ∞)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let result = solver.solve_positive(f, f_prime, 1.0);
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` on the open half-line `(0, ∞)`.
    ///
    /// Equivalent to [`solve_bracketed`](Self::solve_bracketed) with
    /// `lower = 0` and `upper = +∞`; steps that would reach zero or below
    /// are halved.
    pub fn solve_positive<F, G>(&self, f: F, f_prime: G, x0: T) -> NewtonResult<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve_bracketed(f, f_prime, x0, T::zero(), T::infinity())
    }

    /// Find a root of the non-decreasing function `f` inside `(lower, upper)`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find the root of (non-decreasing)
    /// * `f_prime` - Derivative of `f`
    /// * `x0` - Initial guess; replaced by a bracket midpoint if outside
    /// * `lower`, `upper` - Open search interval (`upper` may be `+∞`)
    ///
    /// # Returns
    ///
    /// The final iterate with its iteration count and convergence flag.
    /// A NaN residual stops the iteration immediately.
    pub fn solve_bracketed<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> NewtonResult<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let half = T::from(0.5).unwrap();
        // Never tighter than the working precision of T.
        let tolerance = self.config.tolerance.max(T::epsilon());

        let mut lo = lower;
        let mut hi = upper;
        let mut x = if x0 > lo && x0 < hi {
            x0
        } else {
            bisect_or_expand(lo, hi, lo)
        };

        for iteration in 1..=self.config.max_iterations {
            let f_val = f(x);
            if f_val.is_nan() {
                return NewtonResult {
                    root: x,
                    iterations: iteration,
                    converged: false,
                };
            }
            if f_val == T::zero() {
                return NewtonResult {
                    root: x,
                    iterations: iteration,
                    converged: true,
                };
            }

            if f_val > T::zero() {
                hi = x;
            } else {
                lo = x;
            }

            let d = f_prime(x);
            let next = if d > T::zero() && d.is_finite() {
                let mut step = f_val / d;
                if step.abs() <= tolerance * x.abs() {
                    return NewtonResult {
                        root: x - step,
                        iterations: iteration,
                        converged: true,
                    };
                }

                let mut candidate = x - step;
                let mut halvings = 0;
                while !(candidate > lo && candidate < hi) && halvings < MAX_STEP_HALVINGS {
                    step = step * half;
                    candidate = x - step;
                    halvings += 1;
                }
                if candidate > lo && candidate < hi {
                    candidate
                } else {
                    bisect_or_expand(lo, hi, x)
                }
            } else {
                bisect_or_expand(lo, hi, x)
            };

            if (next - x).abs() <= tolerance * next.abs() {
                return NewtonResult {
                    root: next,
                    iterations: iteration,
                    converged: true,
                };
            }
            x = next;
        }

        NewtonResult {
            root: x,
            iterations: self.config.max_iterations,
            converged: false,
        }
    }
}

/// Bisect a finite bracket; grow away from a finite end of an open one.
fn bisect_or_expand<T: Float>(lo: T, hi: T, x: T) -> T {
    let one = T::one();
    match (lo.is_finite(), hi.is_finite()) {
        (true, true) => (lo + hi) * T::from(0.5).unwrap(),
        (true, false) => {
            if x > T::zero() {
                x + x.max(x - lo)
            } else {
                lo.max(x) + one
            }
        }
        (false, true) => {
            if x < T::zero() {
                x + x.min(x - hi)
            } else {
                hi.min(x) - one
            }
        }
        (false, false) => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        let result = solver.solve_positive(f, f_prime, 1.0);
        assert!(result.converged);
        assert!(
            (result.root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            result.root
        );
    }

    #[test]
    fn test_find_exp_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // e^x - 2 = 0 (find ln(2))
        let f = |x: f64| x.exp() - 2.0;
        let f_prime = |x: f64| x.exp();

        let result = solver.solve_positive(f, f_prime, 0.5);
        assert!((result.root - 2.0_f64.ln()).abs() < 1e-10);
    }

    #[test]
    fn test_overshoot_is_halved_into_domain() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // ln(x) + 5 = 0 has root e^-5; Newton from x = 10 would step to
        // a negative number without safeguarding.
        let f = |x: f64| x.ln() + 5.0;
        let f_prime = |x: f64| 1.0 / x;

        let result = solver.solve_positive(f, f_prime, 10.0);
        assert!(result.converged);
        assert!((result.root - (-5.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_derivative_falls_back_to_bisection() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 200));

        // Derivative reported as zero everywhere: pure bisection on (0, 1).
        let f = |x: f64| x - 0.3;
        let f_prime = |_x: f64| 0.0;

        let result = solver.solve_bracketed(f, f_prime, 0.9, 0.0, 1.0);
        assert!(result.converged);
        assert!((result.root - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_initial_guess_outside_bracket() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x - 0.25;
        let f_prime = |_x: f64| 1.0;

        let result = solver.solve_bracketed(f, f_prime, 5.0, 0.0, 1.0);
        assert!(result.converged);
        assert!((result.root - 0.25).abs() < 1e-12);
    }

    // ========================================
    // Non-convergence
    // ========================================

    #[test]
    fn test_max_iterations_returns_last_iterate() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-300, 3));

        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        let result = solver.solve_positive(f, f_prime, 100.0);
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        assert!(result.root.is_finite() && result.root > 0.0);

        match result.into_result().unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => assert_eq!(iterations, 3),
        }
    }

    #[test]
    fn test_nan_residual_stops() {
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();
        let result = solver.solve_positive(|_x| f64::NAN, |_x| 1.0, 1.0);
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50);
        let solver = NewtonRaphsonSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::new(SolverConfig::new(1e-6, 50));

        let f = |x: f32| x * x - 2.0;
        let f_prime = |x: f32| 2.0 * x;

        let result = solver.solve_positive(f, f_prime, 1.0_f32);
        assert!((result.root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
