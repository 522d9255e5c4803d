//! Check command implementation
//!
//! Self-check of the installed kernels: quantile round trips across shape
//! regimes and sample moments against their closed forms.

use serde::Serialize;
use stats_distributions::fdist::{pf, qf_with};
use stats_distributions::gamma::{pgamma, qgamma_with};
use stats_distributions::parallel::{rf_par_into, rgamma_par_into};
use tracing::{info, warn};

use crate::config::StatlibConfig;
use crate::output::{render, Table};
use crate::{CliError, Result};

/// Seed used when none is configured.
pub const CHECK_SEED: u64 = 20_240_101;

const SAMPLE_SIZE: usize = 200_000;
const PROBES: [f64; 7] = [1e-4, 0.01, 0.1, 0.5, 0.9, 0.99, 0.9999];

/// One self-check line
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub expected: f64,
    pub observed: f64,
    /// Allowed relative deviation
    pub tolerance: f64,
    pub passed: bool,
}

impl CheckResult {
    fn relative(name: impl Into<String>, expected: f64, observed: f64, tolerance: f64) -> Self {
        let passed = ((observed - expected) / expected).abs() <= tolerance;
        Self {
            name: name.into(),
            expected,
            observed,
            tolerance,
            passed,
        }
    }

    fn round_trip(name: impl Into<String>, worst: f64, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            expected: 0.0,
            observed: worst,
            tolerance,
            passed: worst <= tolerance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub seed: u64,
    pub sample_size: usize,
    pub checks: Vec<CheckResult>,
}

impl CheckReport {
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

impl Table for CheckReport {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "statlib self-check (seed {}, n = {})",
            self.seed, self.sample_size
        )];
        for check in &self.checks {
            lines.push(format!(
                "[{}] {:<32} expected {:<14.6e} observed {:<14.6e} tolerance {:.0e}",
                if check.passed { " ok " } else { "FAIL" },
                check.name,
                check.expected,
                check.observed,
                check.tolerance
            ));
        }
        lines.push(format!(
            "{} of {} checks passed",
            self.checks.len() - self.failures(),
            self.checks.len()
        ));
        lines.join("\n")
    }
}

/// Largest relative round-trip error `|cdf(quantile(p)) - p| / p` over the probes.
fn worst_round_trip<Q, C>(quantile: Q, cdf: C) -> f64
where
    Q: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
{
    PROBES
        .iter()
        .map(|&p| ((cdf(quantile(p)) - p) / p).abs())
        .fold(0.0, |worst, err| if err.is_nan() || err > worst { err } else { worst })
}

fn moments(draws: &[f64]) -> (f64, f64) {
    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

/// Run every self-check.
pub fn evaluate(config: &StatlibConfig) -> CheckReport {
    let solver = config.solver_config();
    let parallel = config.parallel_config();
    let seed = config.seed.unwrap_or(CHECK_SEED);
    let mut checks = Vec::new();

    for &(shape, scale) in &[(0.1, 1.0), (1.0, 2.0), (3.0, 2.0), (250.0, 0.01), (1e7, 1.0)] {
        let worst = worst_round_trip(
            |p| qgamma_with(p, shape, scale, &solver),
            |x| pgamma(x, shape, scale),
        );
        checks.push(CheckResult::round_trip(
            format!("gamma({}, {}) round trip", shape, scale),
            worst,
            1e-6,
        ));
    }

    for &(df1, df2) in &[(1.0, 1.0), (5.0, 20.0), (30.0, 3.0)] {
        let worst = worst_round_trip(|p| qf_with(p, df1, df2, &solver), |x| pf(x, df1, df2));
        checks.push(CheckResult::round_trip(
            format!("F({}, {}) round trip", df1, df2),
            worst,
            1e-6,
        ));
    }

    let (shape, scale) = (3.0, 2.0);
    let mut draws = vec![0.0; SAMPLE_SIZE];
    rgamma_par_into(shape, scale, &mut draws, seed, &parallel);
    let (mean, var) = moments(&draws);
    checks.push(CheckResult::relative("gamma(3, 2) mean", shape * scale, mean, 0.01));
    checks.push(CheckResult::relative(
        "gamma(3, 2) variance",
        shape * scale * scale,
        var,
        0.02,
    ));

    rf_par_into(5.0, 20.0, &mut draws, seed, &parallel);
    let (mean, _) = moments(&draws);
    checks.push(CheckResult::relative("F(5, 20) mean", 20.0 / 18.0, mean, 0.02));

    CheckReport {
        seed,
        sample_size: SAMPLE_SIZE,
        checks,
    }
}

/// Run the check command
pub fn run(config: &StatlibConfig) -> Result<()> {
    info!("Running self-check...");
    let report = evaluate(config);
    println!("{}", render(&report, config.format)?);

    let failed = report.failures();
    if failed > 0 {
        warn!(failed, "self-check failed");
        return Err(CliError::CheckFailed {
            failed,
            total: report.checks.len(),
        });
    }
    info!("Self-check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_check_passes() {
        let report = evaluate(&StatlibConfig::default());
        for check in &report.checks {
            assert!(check.passed, "{:?}", check);
        }
        assert_eq!(report.failures(), 0);
        assert_eq!(report.seed, CHECK_SEED);
        assert_eq!(report.checks.len(), 11);
    }

    #[test]
    fn test_default_check_covers_large_shape_and_moments() {
        let report = evaluate(&StatlibConfig::default());
        let find = |name: &str| {
            report
                .checks
                .iter()
                .find(|c| c.name == name)
                .unwrap_or_else(|| panic!("missing check {}", name))
        };

        let large = find("gamma(10000000, 1) round trip");
        assert!(large.passed && large.observed <= 1e-6, "{:?}", large);

        let variance = find("gamma(3, 2) variance");
        assert_eq!(variance.expected, 12.0);
        assert!(variance.passed, "{:?}", variance);
    }

    #[test]
    fn test_relative_check() {
        assert!(CheckResult::relative("x", 6.0, 6.05, 0.01).passed);
        assert!(!CheckResult::relative("x", 6.0, 6.1, 0.01).passed);
    }

    #[test]
    fn test_round_trip_check() {
        assert!(CheckResult::round_trip("x", 1e-9, 1e-6).passed);
        assert!(!CheckResult::round_trip("x", 1e-3, 1e-6).passed);
        assert!(!CheckResult::round_trip("x", f64::NAN, 1e-6).passed);
    }

    #[test]
    fn test_worst_round_trip() {
        // uniform on [0, 1]
        assert_eq!(worst_round_trip(|p| p, |x| x), 0.0);
        assert!(worst_round_trip(|p| p, |_| f64::NAN).is_nan());
    }

    #[test]
    fn test_table_summary() {
        let report = CheckReport {
            seed: 1,
            sample_size: 10,
            checks: vec![
                CheckResult::round_trip("a", 0.0, 1e-6),
                CheckResult::round_trip("b", 1.0, 1e-6),
            ],
        };
        let table = report.to_table();
        assert!(table.contains("FAIL"));
        assert!(table.ends_with("1 of 2 checks passed"));
    }
}
