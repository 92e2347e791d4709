//! Configuration management

use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_RULES_PATH, DEFAULT_TIMEZONE};
use crate::impl_domain_enum_conversions;
use crate::{MenuSlotError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// IANA time zone the business's wall clock runs in.
    pub timezone: String,
}

impl ResolverConfig {
    /// Parse the configured time zone.
    ///
    /// # Errors
    /// Returns `MenuSlotError::Config` for unknown IANA names.
    pub fn tz(&self) -> Result<Tz> {
        Tz::from_str(&self.timezone).map_err(|e| {
            MenuSlotError::Config(format!("Invalid timezone '{}': {}", self.timezone, e))
        })
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_TIMEZONE.to_string() }
    }
}

/// Rule source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Path of the JSON or TOML rules document.
    pub path: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { path: DEFAULT_RULES_PATH.to_string() }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl_domain_enum_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), format: LogFormat::Pretty }
    }
}
