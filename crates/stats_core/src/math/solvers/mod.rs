//! Root-finding solvers and iteration configuration.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Newton's method guarded by step halving and a
//!   sign bracket, used to invert the gamma and beta CDFs
//!
//! ## Configuration
//!
//! Iterative code never embeds its bounds. Root finders take a
//! [`SolverConfig`]:
//! - `tolerance`: Relative-step convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! Series and continued-fraction evaluation take a [`SeriesConfig`]
//! (default: machine epsilon, 1000 terms).
//!
//! ## Non-convergence
//!
//! Exhausting the iteration budget is not an error: the best iterate is
//! returned in a [`NewtonResult`] with `converged == false`.
//!
//! ## Examples
//!
//! ```
//! use stats_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let root = solver.solve_positive(f, f_prime, 1.0).root;
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::{SeriesConfig, SolverConfig};
pub use newton_raphson::{NewtonRaphsonSolver, NewtonResult};
