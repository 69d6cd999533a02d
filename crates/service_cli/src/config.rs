//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use prng_core::GeneratorKind;
use serde::Deserialize;
use thiserror::Error;

const ENV_GENERATOR: &str = "RNGTOOL_GENERATOR";
const ENV_SEED: &str = "RNGTOOL_SEED";
const ENV_COUNT: &str = "RNGTOOL_COUNT";
const ENV_LOG_LEVEL: &str = "RNGTOOL_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid generator setting: {0}")]
    Generator(#[from] prng_core::RngError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
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

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generator algorithm
    #[serde(deserialize_with = "deserialize_from_str")]
    pub generator: GeneratorKind,
    /// Seed passed to the generator
    pub seed: i64,
    /// Number of draws
    pub count: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Ranf,
            seed: 0,
            count: 10,
            log_level: LogLevel::Info,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Override fields from a variable lookup
    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(generator) = lookup(ENV_GENERATOR) {
            self.generator = generator.parse()?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = seed.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_SEED,
                value: seed.clone(),
            })?;
        }

        if let Some(count) = lookup(ENV_COUNT) {
            self.count = count.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_COUNT,
                value: count.clone(),
            })?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level.parse()?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(generator) = cli.generator {
            self.generator = generator;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Generator override
    pub generator: Option<GeneratorKind>,
    /// Seed override
    pub seed: Option<i64>,
    /// Draw count override
    pub count: Option<usize>,
    /// Verbose flag, raises the log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// A missing file at `config_path` is tolerated only when the path was not
/// given explicitly.
pub fn build_config(
    config_path: &Path,
    explicit_path: bool,
    cli: &CliOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = if explicit_path || config_path.exists() {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    Ok(config)
}
