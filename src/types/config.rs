//! Configuration for recursive-ask.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::AskResult;

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "http://challenge-server.code-check.io/api/recursive/ask";

/// Main configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote oracle settings.
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Evaluator settings.
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
}

/// General settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Remote oracle settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// Endpoint queried with `?seed=..&n=..`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Honour the `HTTP_PROXY`/`NO_PROXY` environment variables.
    #[serde(default = "default_true")]
    pub system_proxy: bool,
}

impl OracleConfig {
    /// Creates an oracle configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
            system_proxy: true,
        }
    }

    /// Request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

/// Evaluator settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluatorConfig {
    /// Which calls are memoized.
    #[serde(default)]
    pub memo_strategy: MemoStrategy,
}

/// Memoization granularity of the evaluator.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MemoStrategy {
    /// Memoize the four predecessors consumed by each expansion.
    /// The top-level argument itself is never stored.
    #[default]
    Predecessors,
    /// Memoize every even argument on entry, the outermost call included.
    Entry,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> AskResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            oracle: OracleConfig::default(),
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
