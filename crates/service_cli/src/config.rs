//! CLI configuration management
//!
//! Handles loading configuration from TOML files, `STATLIB_*` environment
//! variables and command-line flags.

use serde::Deserialize;
use stats_core::math::solvers::SolverConfig;
use stats_distributions::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

// Environment variables read by `StatlibConfig::apply_env`
pub const ENV_LOG_LEVEL: &str = "STATLIB_LOG_LEVEL";
pub const ENV_FORMAT: &str = "STATLIB_FORMAT";
pub const ENV_SEED: &str = "STATLIB_SEED";
pub const ENV_TOLERANCE: &str = "STATLIB_TOLERANCE";
pub const ENV_MAX_ITERATIONS: &str = "STATLIB_MAX_ITERATIONS";
pub const ENV_BATCH_SIZE: &str = "STATLIB_BATCH_SIZE";
pub const ENV_PARALLEL_THRESHOLD: &str = "STATLIB_PARALLEL_THRESHOLD";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level` and `STATLIB_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// statlib configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatlibConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Sampling seed; a fresh one is drawn per run when absent
    pub seed: Option<u64>,
    /// Relative tolerance of the quantile refinement
    pub tolerance: f64,
    /// Iteration cap of the quantile refinement
    pub max_iterations: usize,
    /// Elements per parallel chunk (also the unit of seeding)
    pub batch_size: usize,
    /// Minimum element count before work is spread across threads
    pub parallel_threshold: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for StatlibConfig {
    fn default() -> Self {
        let solver = SolverConfig::<f64>::default();
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            seed: None,
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

impl StatlibConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: StatlibConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables.
    ///
    /// `lookup` maps a variable name to its value; the process environment
    /// is read with `|key| std::env::var(key).ok()`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_value(ENV_SEED, &seed)?);
        }
        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            self.tolerance = parse_value(ENV_TOLERANCE, &tolerance)?;
        }
        if let Some(max_iterations) = lookup(ENV_MAX_ITERATIONS) {
            self.max_iterations = parse_value(ENV_MAX_ITERATIONS, &max_iterations)?;
        }
        if let Some(batch_size) = lookup(ENV_BATCH_SIZE) {
            self.batch_size = parse_value(ENV_BATCH_SIZE, &batch_size)?;
        }
        if let Some(threshold) = lookup(ENV_PARALLEL_THRESHOLD) {
            self.parallel_threshold = parse_value(ENV_PARALLEL_THRESHOLD, &threshold)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "tolerance",
                value: self.tolerance.to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_iterations",
                value: "0".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "batch_size",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(tolerance) = cli.tolerance {
            self.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.max_iterations = max_iterations;
        }
        Ok(())
    }

    /// Solver settings for the quantile kernels
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Chunking settings for the bulk kernels
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(self.batch_size, self.parallel_threshold)
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Solver tolerance override
    pub tolerance: Option<f64>,
    /// Solver iteration cap override
    pub max_iterations: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<StatlibConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<StatlibConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => StatlibConfig::from_file(path)?,
        None => StatlibConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
