//! Tracing/logging initialization.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const FORMAT_ENV: &str = "KEYSTONE_LOG_FORMAT";

/// Environment variable holding the filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0} (expected `json` or `pretty`)")]
    UnknownFormat(String),
}

/// Tracing configuration (filter directives + output format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `KEYSTONE_LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { filter, format })
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// An unusable format falls back to the default config; the problem is logged
/// once the subscriber is up. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init() {
    match TracingConfig::from_env() {
        Ok(config) => init_with(&config),
        Err(err) => {
            init_with(&TracingConfig::default());
            tracing::warn!(error = %err, "invalid tracing configuration, using defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit config.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &TracingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
