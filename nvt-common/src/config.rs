//! Configuration file discovery and loading
//!
//! Services resolve their settings through a fixed priority chain:
//! 1. Environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! This module provides the file-discovery and parsing half of that chain;
//! the typed settings structs and their env overrides live with each service.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Locate the config file for a service (e.g. `config_file_path("nvt-vs")`).
///
/// Linux checks `~/.config/nvt/<service>.toml` then `/etc/nvt/<service>.toml`;
/// macOS and Windows use the platform config directory. Returns an error when
/// no file exists, which callers treat as "use defaults".
pub fn config_file_path(service: &str) -> Result<PathBuf> {
    let file_name = format!("{}.toml", service);

    if cfg!(target_os = "linux") {
        let user_config = dirs::config_dir().map(|d| d.join("nvt").join(&file_name));
        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/nvt").join(&file_name);
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config(format!(
            "No config file found for {}",
            service
        )));
    }

    let path = dirs::config_dir()
        .map(|d| d.join("nvt").join(&file_name))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// Read and parse a TOML config file into a typed settings struct.
pub fn load_toml<T: DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read config failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse config failed: {}", e)))
}

/// Read a non-empty environment variable, trimming whitespace.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
