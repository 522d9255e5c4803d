//! Quantile command implementation
//!
//! Inverts the gamma or F CDF at each requested probability.

use stats_distributions::parallel::par_apply_into;
use stats_distributions::validation::validate_probability;
use tracing::{debug, info};

use super::{DistArgs, Evaluation};
use crate::config::StatlibConfig;
use crate::output::render;
use crate::Result;

/// Compute the quantiles of `probs`.
pub fn evaluate(dist: &DistArgs, probs: &[f64], config: &StatlibConfig) -> Result<Evaluation> {
    dist.validate()?;
    for &p in probs {
        validate_probability(p)?;
    }

    let solver = config.solver_config();
    let mut values = vec![0.0; probs.len()];
    par_apply_into(
        probs,
        &mut values,
        |p| dist.quantile(p, &solver),
        &config.parallel_config(),
    )?;
    debug!(count = probs.len(), "quantiles evaluated");

    Ok(Evaluation {
        distribution: dist.label(),
        function: "quantile",
        inputs: probs.to_vec(),
        values,
    })
}

/// Run the quantile command
pub fn run(dist: &DistArgs, probs: &[f64], config: &StatlibConfig) -> Result<()> {
    info!(distribution = %dist.label(), count = probs.len(), "Computing quantiles");
    let report = evaluate(dist, probs, config)?;
    println!("{}", render(&report, config.format)?);
    Ok(())
}
