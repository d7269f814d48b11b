//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after loading and is handed to the engine
//! explicitly; nothing reads the environment after startup.

use std::env;

use serde::Serialize;
use tip_core::{CoreError, TipPresets};
use tracing::warn;

/// Default tracing directive when neither `RUST_LOG` nor `TIP_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,tip=debug";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Preset tip buttons, in display order.
    pub presets: TipPresets,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    /// Five presets (5, 10, 15, 25, 50 %) and INFO logging.
    fn default() -> Self {
        AppConfig {
            presets: TipPresets::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `TIP_PRESETS`: comma-separated whole percentages, e.g. `"10,15,20"`
    /// - `TIP_LOG`: tracing filter directive, e.g. `"debug"`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("TIP_PRESETS") {
            config.presets = parse_presets(&raw)?;
        }

        if let Some(filter) = lookup("TIP_LOG") {
            if filter.trim().is_empty() {
                warn!("TIP_LOG is empty, keeping default log filter");
            } else {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}

/// Parses `"5, 10,15"` into a validated preset set.
fn parse_presets(raw: &str) -> Result<TipPresets, ConfigError> {
    let percents = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "TIP_PRESETS".to_string(),
                    value: part.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TipPresets::new(percents)?)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid tip presets: {0}")]
    Presets(#[from] CoreError),
}
