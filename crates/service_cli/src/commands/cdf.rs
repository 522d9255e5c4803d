//! CDF command implementation

use stats_distributions::fdist::pf_into;
use stats_distributions::gamma::pgamma_into;
use tracing::info;

use super::{DistArgs, Evaluation, Family};
use crate::config::StatlibConfig;
use crate::output::render;
use crate::Result;

/// Evaluate `P(X <= x)` at every point of `xs`.
pub fn evaluate(dist: &DistArgs, xs: &[f64]) -> Result<Evaluation> {
    dist.validate()?;

    let mut values = vec![0.0; xs.len()];
    match dist.dist {
        Family::Gamma => pgamma_into(xs, dist.a, dist.b, &mut values)?,
        Family::F => pf_into(xs, dist.a, dist.b, &mut values)?,
    }

    Ok(Evaluation {
        distribution: dist.label(),
        function: "cdf",
        inputs: xs.to_vec(),
        values,
    })
}

/// Run the cdf command
pub fn run(dist: &DistArgs, xs: &[f64], config: &StatlibConfig) -> Result<()> {
    info!(distribution = %dist.label(), count = xs.len(), "Evaluating CDF");
    let report = evaluate(dist, xs)?;
    println!("{}", render(&report, config.format)?);
    Ok(())
}
