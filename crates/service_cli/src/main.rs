//! statlib CLI - Gamma and F distribution kernels from the command line
//!
//! # Commands
//!
//! - `statlib quantile --dist gamma -a 3 -b 2 0.05 0.95` - Quantiles
//! - `statlib cdf --dist f -a 5 -b 20 2.71` - Cumulative probabilities
//! - `statlib sample --dist gamma -a 3 -b 2 --count 5 --seed 42` - Variates
//! - `statlib check` - Round-trip and moment self-check
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config` / `STATLIB_CONFIG`), then
//! `STATLIB_*` environment variables, then command-line flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::sample::Layout;
use commands::DistArgs;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// statlib gamma/F distribution toolkit
#[derive(Parser)]
#[command(name = "statlib")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "STATLIB_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Relative tolerance of the quantile solver
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Iteration cap of the quantile solver
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantile (inverse CDF) at each probability
    Quantile {
        #[command(flatten)]
        dist: DistArgs,

        /// Probabilities in [0, 1]
        #[arg(required = true, allow_negative_numbers = true)]
        probs: Vec<f64>,
    },

    /// Cumulative probability at each point
    Cdf {
        #[command(flatten)]
        dist: DistArgs,

        /// Evaluation points
        #[arg(required = true, allow_negative_numbers = true)]
        xs: Vec<f64>,
    },

    /// Draw random variates
    Sample {
        #[command(flatten)]
        dist: DistArgs,

        /// Number of variates (default 10)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Matrix rows (with --cols)
        #[arg(long)]
        rows: Option<usize>,

        /// Matrix columns (with --rows)
        #[arg(long)]
        cols: Option<usize>,

        /// Random seed; overrides STATLIB_SEED and the config file
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run the numerical self-check
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let seed = match &cli.command {
            Commands::Sample { seed, .. } => *seed,
            _ => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            seed,
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        format = %config.format,
        seed = ?config.seed,
        tolerance = config.tolerance,
        max_iterations = config.max_iterations,
        batch_size = config.batch_size,
        parallel_threshold = config.parallel_threshold,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Quantile { dist, probs } => commands::quantile::run(&dist, &probs, &config),
        Commands::Cdf { dist, xs } => commands::cdf::run(&dist, &xs, &config),
        Commands::Sample {
            dist,
            count,
            rows,
            cols,
            ..
        } => {
            let layout = Layout::from_args(count, rows, cols)?;
            commands::sample::run(&dist, layout, &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}
