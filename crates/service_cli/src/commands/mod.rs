//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The shared
//! [`DistArgs`] selects a distribution family and its two parameters.

pub mod cdf;
pub mod check;
pub mod quantile;
pub mod sample;

use clap::{Args, ValueEnum};
use serde::Serialize;
use stats_core::math::solvers::SolverConfig;
use stats_distributions::fdist::{qf_with, validate_f_params};
use stats_distributions::gamma::{qgamma_with, validate_gamma_params};

use crate::Result;

/// Supported distribution families
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// Gamma(shape, scale)
    Gamma,
    /// F(df1, df2)
    F,
}

/// Distribution selection shared by `quantile`, `cdf` and `sample`
#[derive(Args, Debug, Clone, Copy)]
pub struct DistArgs {
    /// Distribution family
    #[arg(short, long, value_enum)]
    pub dist: Family,

    /// Shape (gamma) or numerator degrees of freedom (F)
    #[arg(short, long)]
    pub a: f64,

    /// Scale (gamma) or denominator degrees of freedom (F)
    #[arg(short, long)]
    pub b: f64,
}

impl DistArgs {
    /// Reject non-positive or non-finite parameters, naming the offender.
    pub fn validate(&self) -> Result<()> {
        match self.dist {
            Family::Gamma => validate_gamma_params(self.a, self.b)?,
            Family::F => validate_f_params(self.a, self.b)?,
        }
        Ok(())
    }

    /// Display name, e.g. `Gamma(shape=3, scale=2)`.
    pub fn label(&self) -> String {
        match self.dist {
            Family::Gamma => format!("Gamma(shape={}, scale={})", self.a, self.b),
            Family::F => format!("F(df1={}, df2={})", self.a, self.b),
        }
    }

    /// Quantile at `p` with an explicit solver configuration.
    pub fn quantile(&self, p: f64, solver: &SolverConfig<f64>) -> f64 {
        match self.dist {
            Family::Gamma => qgamma_with(p, self.a, self.b, solver),
            Family::F => qf_with(p, self.a, self.b, solver),
        }
    }

    /// Theoretical mean; `None` where it does not exist (F with `df2 <= 2`).
    pub fn mean(&self) -> Option<f64> {
        match self.dist {
            Family::Gamma => Some(self.a * self.b),
            Family::F if self.b > 2.0 => Some(self.b / (self.b - 2.0)),
            Family::F => None,
        }
    }
}

/// Evaluated points of a scalar function.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub distribution: String,
    pub function: &'static str,
    pub inputs: Vec<f64>,
    pub values: Vec<f64>,
}

impl crate::output::Table for Evaluation {
    fn to_table(&self) -> String {
        use crate::output::cell;

        let mut lines = vec![
            format!("{} {}", self.distribution, self.function),
            format!("{:>22}{:>22}", "input", "value"),
        ];
        for (&input, &value) in self.inputs.iter().zip(&self.values) {
            lines.push(format!("{}{}", cell(input), cell(value)));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use stats_distributions::fdist::pf;
    use stats_distributions::gamma::pgamma;

    fn gamma(a: f64, b: f64) -> DistArgs {
        DistArgs {
            dist: Family::Gamma,
            a,
            b,
        }
    }

    fn f(a: f64, b: f64) -> DistArgs {
        DistArgs { dist: Family::F, a, b }
    }

    #[test]
    fn test_validate_names_parameter() {
        assert!(gamma(3.0, 2.0).validate().is_ok());
        match gamma(3.0, -2.0).validate() {
            Err(CliError::Distribution(err)) => assert!(err.to_string().contains("scale")),
            other => panic!("unexpected {:?}", other),
        }
        match f(0.0, 2.0).validate() {
            Err(CliError::Distribution(err)) => assert!(err.to_string().contains("df1")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_dispatch() {
        let solver = SolverConfig::default();
        let g = gamma(1.0, 2.0);
        // exponential with mean 2
        assert_relative_eq!(g.quantile(0.5, &solver), 2.0 * 2f64.ln(), max_relative = 1e-10);
        assert_relative_eq!(pgamma(2.0 * 2f64.ln(), 1.0, 2.0), 0.5, max_relative = 1e-12);

        let ff = f(2.0, 2.0);
        assert_relative_eq!(ff.quantile(0.8, &solver), 4.0, max_relative = 1e-9);
        assert_relative_eq!(pf(ff.quantile(0.3, &solver), 2.0, 2.0), 0.3, max_relative = 1e-9);
    }

    #[test]
    fn test_mean() {
        assert_eq!(gamma(3.0, 2.0).mean(), Some(6.0));
        assert_relative_eq!(f(5.0, 20.0).mean().unwrap(), 20.0 / 18.0);
        assert_eq!(f(5.0, 2.0).mean(), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(gamma(3.0, 2.0).label(), "Gamma(shape=3, scale=2)");
        assert_eq!(f(5.0, 20.0).label(), "F(df1=5, df2=20)");
    }
}
