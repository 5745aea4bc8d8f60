//! userpath Configuration Module
//! Handles loading userpath.config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "userpath.config.json";
pub const CONFIG_ENV: &str = "USERPATH_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config")]
    ReadError(#[from] std::io::Error),
    #[error("Invalid config format")]
    ParseError(#[from] serde_json::Error),
}

/// How the per-user PATH is physically read and written. Both backends are
/// Windows only; elsewhere opening either one fails with `UnsupportedPlatform`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// HKCU\Environment via the registry API
    #[default]
    Registry,
    /// `powershell -Command` shim. .NET expands `%VAR%` segments on read and
    /// writes the value back as REG_SZ, so expandable entries are flattened
    /// to their current expansion.
    PowerShell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    /// Broadcast WM_SETTINGCHANGE after a registry write
    #[serde(default = "default_broadcast")]
    pub broadcast: bool,
    /// Explicit PowerShell executable for the shim backend
    #[serde(default)]
    pub shell: Option<String>,
}

fn default_broadcast() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            broadcast: default_broadcast(),
            shell: None,
        }
    }
}

impl Config {
    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `$USERPATH_CONFIG`, else the per-user config directory.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("userpath").join(CONFIG_FILE))
    }
}
