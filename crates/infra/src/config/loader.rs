//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `MENUSLOT_RULES_PATH` is present
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//!
//! ## Environment Variables
//! - `MENUSLOT_RULES_PATH`: rules document path (required)
//! - `MENUSLOT_TIMEZONE`: IANA time zone of the business (default `UTC`)
//! - `MENUSLOT_LOG_LEVEL`: default log filter (default `info`)
//! - `MENUSLOT_LOG_FORMAT`: `pretty` or `json` (default `pretty`)
//!
//! ## File Locations
//! `config.{json,toml}` and `menuslot.{json,toml}` are probed in the working
//! directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};

use menuslot_domain::constants::{DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE};
use menuslot_domain::{
    Config, LogFormat, LoggingConfig, MenuSlotError, ResolverConfig, Result, RulesConfig,
};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "menuslot.json", "menuslot.toml"];

/// Load configuration, preferring the environment over config files.
///
/// # Errors
/// Returns `MenuSlotError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `MENUSLOT_*` environment variables.
///
/// # Errors
/// Returns `MenuSlotError::Config` if `MENUSLOT_RULES_PATH` is missing or a
/// value does not parse.
pub fn load_from_env() -> Result<Config> {
    let rules_path = env_var("MENUSLOT_RULES_PATH")?;
    let timezone = env_or("MENUSLOT_TIMEZONE", DEFAULT_TIMEZONE);
    let level = env_or("MENUSLOT_LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let format = match std::env::var("MENUSLOT_LOG_FORMAT") {
        Ok(raw) => raw
            .parse::<LogFormat>()
            .map_err(|e| MenuSlotError::Config(format!("Invalid log format: {e}")))?,
        Err(_) => LogFormat::default(),
    };

    let config = Config {
        resolver: ResolverConfig { timezone },
        rules: RulesConfig { path: rules_path },
        logging: LoggingConfig { level, format },
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file.
///
/// With `None`, the first file found by [`probe_config_paths`] is used. The
/// format follows the extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `MenuSlotError::Config` if the file is missing, unreadable, or
/// malformed, or if its time zone is unknown.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MenuSlotError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MenuSlotError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MenuSlotError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MenuSlotError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MenuSlotError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MenuSlotError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Reject configurations that would only fail later, at resolution time.
fn validate(config: &Config) -> Result<()> {
    config.resolver.tz()?;
    if config.rules.path.trim().is_empty() {
        return Err(MenuSlotError::Config("Rules path must not be empty".into()));
    }
    Ok(())
}

/// Probe the standard locations for a config file.
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        let parent = cwd.join("..");
        roots.extend([cwd, parent]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MenuSlotError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
