//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Special functions are accessible via the `math::special` re-exports.
#[test]
fn test_special_module_exports() {
    use stats_core::math::special::{
        gamma_density, incomplete_gamma_pair, inv_reg_incomplete_beta, ln_beta, ln_gamma,
        norm_cdf, norm_pdf, norm_quantile, reg_incomplete_beta, reg_lower_gamma,
        reg_lower_gamma_with, reg_upper_gamma, reg_upper_gamma_with,
    };
    use stats_core::math::solvers::SeriesConfig;

    let config = SeriesConfig::default();
    let _ = ln_gamma(3.0_f64);
    let _ = ln_beta(2.0_f64, 3.0);
    let _ = reg_lower_gamma(2.0_f64, 1.0);
    let _ = reg_upper_gamma(2.0_f64, 1.0);
    let _ = reg_lower_gamma_with(2.0_f64, 1.0, &config);
    let _ = reg_upper_gamma_with(2.0_f64, 1.0, &config);
    let _ = incomplete_gamma_pair(2.0_f64, 1.0, &config);
    let _ = gamma_density(2.0_f64, 1.0);
    let _ = reg_incomplete_beta(2.0_f64, 3.0, 0.5);
    let _ = inv_reg_incomplete_beta(2.0_f64, 3.0, 0.5);
    let _ = norm_cdf(0.3_f64);
    let _ = norm_pdf(0.3_f64);
    let _ = norm_quantile(0.3_f64);
}

/// Solvers and their configuration are accessible via `math::solvers`.
#[test]
fn test_solvers_module_exports() {
    use stats_core::math::solvers::{NewtonRaphsonSolver, NewtonResult, SolverConfig};

    let solver = NewtonRaphsonSolver::new(SolverConfig::<f64>::fast());
    let result: NewtonResult<f64> = solver.solve_positive(|x| x * x - 9.0, |x| 2.0 * x, 1.0);
    assert!((result.root - 3.0).abs() < 1e-5);
}

/// Traits and types are accessible via `traits` and `types`.
#[test]
fn test_traits_and_types_exports() {
    use stats_core::traits::{Container, Float};
    use stats_core::types::{DenseMatrix, DistributionError, SolverError};

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);

    let m: DenseMatrix<f64> = Container::from_fn(2, 2, |r, c| (r + c) as f64);
    assert_eq!(Container::shape(&m), (2, 2));

    let err: DistributionError = DistributionError::InvalidProbability(1.5);
    assert!(err.to_string().contains("1.5"));

    let err = SolverError::MaxIterationsExceeded { iterations: 7 };
    assert!(err.to_string().contains('7'));
}

/// The gamma CDF and the normal CDF agree where they should:
/// a chi-square with one degree of freedom is a squared standard normal.
#[test]
fn test_chi_square_one_matches_normal() {
    use stats_core::math::special::{norm_cdf, reg_lower_gamma};

    for &z in &[0.1_f64, 0.7, 1.5, 2.5, 4.0] {
        let chi_sq = reg_lower_gamma(0.5, z * z / 2.0);
        let normal = 2.0 * norm_cdf(z) - 1.0;
        assert!((chi_sq - normal).abs() < 1e-13, "z = {}", z);
    }
}
