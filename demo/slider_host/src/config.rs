//! Host configuration management.
//!
//! Handles loading configuration from TOML files with environment variable
//! and CLI override support.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`TDA_*`)
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use tda_core::source::{DEFAULT_POINT_COUNT, DEFAULT_RADIUS_LIMIT, DEFAULT_SEED};

/// Configuration error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file or environment value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// One or more invalid settings
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the host
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

/// Host configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Number of sampled points
    pub points: usize,
    /// Radius of the sampling disk
    pub radius_limit: f64,
    /// Generator seed
    pub seed: u64,
    /// Directory figures are written to
    pub output_dir: PathBuf,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINT_COUNT,
            radius_limit: DEFAULT_RADIUS_LIMIT,
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("figures"),
            log_level: LogLevel::Info,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{}={:?} is not a valid value", key, raw)))
}

impl HostConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `TDA_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Keys: `TDA_POINTS`, `TDA_RADIUS_LIMIT`, `TDA_SEED`, `TDA_OUTPUT_DIR`,
    /// `TDA_LOG_LEVEL`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("TDA_POINTS") {
            self.points = parse_env("TDA_POINTS", &raw)?;
        }
        if let Some(raw) = lookup("TDA_RADIUS_LIMIT") {
            self.radius_limit = parse_env("TDA_RADIUS_LIMIT", &raw)?;
        }
        if let Some(raw) = lookup("TDA_SEED") {
            self.seed = parse_env("TDA_SEED", &raw)?;
        }
        if let Some(raw) = lookup("TDA_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("TDA_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&raw)?;
        }
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(points) = cli.points {
            self.points = points;
        }
        if let Some(radius_limit) = cli.radius_limit {
            self.radius_limit = radius_limit;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.points == 0 {
            errors.push("points must be greater than 0".to_string());
        }
        if self.points > 1_000_000 {
            errors.push(format!(
                "points {} exceeds maximum allowed (1,000,000)",
                self.points
            ));
        }
        if !self.radius_limit.is_finite() || self.radius_limit <= 0.0 {
            errors.push(format!(
                "radius_limit must be a finite positive number, got {}",
                self.radius_limit
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// CLI overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Point count override
    pub points: Option<usize>,
    /// Sampling disk radius override
    pub radius_limit: Option<f64>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliOverrides) -> Result<HostConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    }
    .with_env_override()?;

    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
