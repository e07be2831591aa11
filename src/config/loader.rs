//! Configuration file loading with precedence handling.

use crate::view_state::scroll::DEFAULT_TICK_CAP;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HEXVIEW_CONFIG";
/// Environment variable overriding the wheel step.
pub const WHEEL_STEP_ENV: &str = "HEXVIEW_WHEEL_STEP";
/// Environment variable overriding the scrollbar tick cap.
pub const TICK_CAP_ENV: &str = "HEXVIEW_TICK_CAP";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An override variable does not hold a valid number.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hexview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Upper bound of the scrollbar tick domain.
    #[serde(default)]
    pub tick_cap: Option<u64>,

    /// Rows scrolled per wheel notch.
    #[serde(default)]
    pub wheel_step: Option<u32>,

    /// Rows kept on screen when paging.
    #[serde(default)]
    pub page_overlap: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Upper bound of the scrollbar tick domain.
    pub tick_cap: u64,
    /// Rows scrolled per wheel notch.
    pub wheel_step: u32,
    /// Rows kept on screen when paging.
    pub page_overlap: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Render without colours.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            tick_cap: DEFAULT_TICK_CAP,
            wheel_step: 3,
            page_overlap: 1,
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/hexview/hexview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hexview").join("hexview.log")
    } else {
        PathBuf::from("hexview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/hexview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HEXVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/hexview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        tick_cap: config.tick_cap.unwrap_or(defaults.tick_cap),
        wheel_step: config.wheel_step.unwrap_or(defaults.wheel_step),
        page_overlap: config.page_overlap.unwrap_or(defaults.page_overlap),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: defaults.no_color,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HEXVIEW_WHEEL_STEP`: Override wheel step
/// - `HEXVIEW_TICK_CAP`: Override tick cap
/// - `NO_COLOR`: Disable colours when set to a non-empty value
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnv` if a numeric override does not parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(step) = parse_env(WHEEL_STEP_ENV)? {
        config.wheel_step = step;
    }

    if let Some(cap) = parse_env(TICK_CAP_ENV)? {
        config.tick_cap = cap;
    }

    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.no_color = true;
    }

    Ok(config)
}

fn parse_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, no_color: bool) -> ResolvedConfig {
    if no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
