//! # Runtime Configuration
//!
//! Defaults overridden from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `LEDGER_DIFFICULTY` | `chain.difficulty` | 2 |
//! | `LEDGER_LOG` | `log_level` | `info` |
//!
//! Unparseable overrides are logged and ignored. Out-of-range values are
//! rejected by [`RuntimeConfig::validate`].

use lc_01_hash_chain::{ChainConfig, ChainError, Difficulty};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the mining difficulty.
pub const DIFFICULTY_ENV: &str = "LEDGER_DIFFICULTY";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "LEDGER_LOG";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Hash chain configuration.
    pub chain: ChainConfig,
    /// Log filter directive, e.g. `info` or `lc_01_hash_chain=debug`.
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Fast-mining configuration for tests.
    pub fn for_testing() -> Self {
        Self {
            chain: ChainConfig::for_testing(),
            ..Self::default()
        }
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(DIFFICULTY_ENV) {
            match raw.trim().parse() {
                Ok(difficulty) => {
                    self.chain.difficulty = difficulty;
                    info!(difficulty, "Loaded difficulty from environment");
                }
                Err(_) => warn!(value = %raw, "{DIFFICULTY_ENV} is not a number, ignoring"),
            }
        }

        if let Some(raw) = lookup(LOG_ENV) {
            if raw.trim().is_empty() {
                warn!("{LOG_ENV} is empty, ignoring");
            } else {
                self.log_level = raw.trim().to_string();
            }
        }

        self
    }

    /// Check every field and return the chain difficulty.
    pub fn validate(&self) -> Result<Difficulty, ConfigError> {
        self.log_filter(None)?;
        Ok(self.chain.validate()?)
    }

    /// Log filter for the subscriber. `rust_log` (the `RUST_LOG` value)
    /// takes precedence over `log_level`.
    pub fn log_filter(&self, rust_log: Option<&str>) -> Result<EnvFilter, ConfigError> {
        let directive = rust_log
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(self.log_level.as_str());
        EnvFilter::try_new(directive)
            .map_err(|e| ConfigError::InvalidLogLevel(format!("{directive}: {e}")))
    }
}

/// Build the configuration from defaults and the process environment.
pub fn load_config() -> RuntimeConfig {
    RuntimeConfig::default().with_overrides(|key| std::env::var(key).ok())
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Difficulty outside the supported range.
    #[error("Invalid chain configuration: {0}")]
    Chain(#[from] ChainError),

    /// Log filter directive could not be parsed.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
