//! Configuration module.
//!
//! Precedence: defaults → config file → environment → command line.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::path::PathBuf;

/// Resolve the full configuration chain.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if an override variable is malformed.
pub fn resolve(config_path: Option<PathBuf>, no_color: bool) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file))?;
    Ok(apply_cli_overrides(config, no_color))
}
