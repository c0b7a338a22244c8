//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\folk-catalog\config.toml
//! - macOS: ~/Library/Application Support/folk-catalog/config.toml
//! - Linux: ~/.config/folk-catalog/config.toml
//!
//! The environment wins over the file for credentials, so a key exported as
//! `SMITHSONIAN_API_KEY` never has to be written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogConfig, http, smithsonian};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Outgoing request settings
    pub http: HttpConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// api.data.gov key for the Smithsonian Open Access API
    pub smithsonian_api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Client identifier sent to every archive
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Smithsonian key: environment first, then the file. Blank values count as unset.
    pub fn smithsonian_api_key(&self) -> Option<String> {
        resolve_key(
            std::env::var(smithsonian::API_KEY_VAR).ok(),
            self.credentials.smithsonian_api_key.clone(),
        )
    }

    /// Settings for the catalog service. An unusable user agent is replaced by the default.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            smithsonian_api_key: self.smithsonian_api_key(),
            user_agent: http::checked_user_agent(&self.http.user_agent).to_string(),
        }
    }
}

fn resolve_key(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or(from_file.filter(|k| !k.trim().is_empty()))
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folk-catalog"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from `path`, falling back to defaults with a log line
pub fn load_from(path: &Path) -> Config {
    match try_load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from `path`. A missing file gives defaults; an unreadable
/// or unparsable one is an error.
pub fn try_load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Store the Smithsonian key in the default config file
pub fn store_smithsonian_key(key: &str) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    store_smithsonian_key_at(&path, key)?;
    Ok(path)
}

/// Store the Smithsonian key in `path`, keeping every other setting.
///
/// A file that exists but does not parse is left untouched.
pub fn store_smithsonian_key_at(path: &Path, key: &str) -> Result<(), ConfigError> {
    let mut config = try_load_from(path)?;
    config.credentials.smithsonian_api_key = Some(key.to_string());
    save_to(&config, path)
}

/// Save configuration to `path`, creating parent directories
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
