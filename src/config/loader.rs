//! Configuration loading and discovery for `memory-bank.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::MemoryBankConfig;
use crate::logging::LogLevel;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "memory-bank.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse memory-bank.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override bind host
    pub host: Option<String>,
    /// Override listen port
    pub port: Option<u16>,
    /// Override MCP endpoint path
    pub mcp_path: Option<String>,
    /// Override log level
    pub log_level: Option<LogLevel>,
}

/// Find memory-bank.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for memory-bank.toml
/// 2. Check XDG_CONFIG_HOME/memory-bank/memory-bank.toml (or ~/.config/memory-bank/memory-bank.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find memory-bank.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("memory-bank").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find memory-bank.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a memory-bank.toml file.
///
/// If a path is provided, loads from that file (which must exist). Otherwise
/// uses `find_config()`, falling back to defaults when nothing is found.
/// Values are not validated here; `merge_cli_overrides` validates the merged
/// result.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("deploy/memory-bank.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<MemoryBankConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(MemoryBankConfig::default()),
    }
}

/// Load configuration from a specific file path.
///
/// A relative log file path is resolved against the config file's directory.
fn load_config_file(path: &Path) -> Result<MemoryBankConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: MemoryBankConfig = toml::from_str(&contents)?;

    if let (Some(root), Some(file)) = (config_dir(path), config.logging.file.as_ref()) {
        config.logging.file = Some(resolve_path(root, file));
    }

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Merge CLI overrides into a configuration, then re-validate.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(
    config: &mut MemoryBankConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref host) = overrides.host {
        config.server.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if let Some(ref mcp_path) = overrides.mcp_path {
        config.server.mcp_path = mcp_path.clone();
    }
    if let Some(level) = overrides.log_level {
        config.logging.level = level;
    }

    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}

/// Directory containing a config file.
pub fn config_dir(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to `root`. Absolute paths are returned unchanged.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
