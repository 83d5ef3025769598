//! Datasource configuration for Sunflake.
//!
//! Connection settings persisted per datasource instance, loadable from
//! TOML. Secrets are write-only: they serialize for submission to the host
//! but are never read back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SunflakeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    Basic,
    Keypair,
}

/// Per-instance connection settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SunflakeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub authtype: AuthType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    pub conn_pool_options: ConnectionPoolOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionPoolOptions {
    pub max_open: u32,
    pub max_idle: u32,
    /// Idle timeout in seconds.
    pub idle_timeout: u64,
    /// Maximum connection lifetime in seconds.
    pub max_lifetime: u64,
}

impl Default for ConnectionPoolOptions {
    fn default() -> Self {
        Self {
            max_open: 100,
            max_idle: 2,
            idle_timeout: 180,
            max_lifetime: 3600,
        }
    }
}

/// Secrets submitted to the host's secure storage. No `Deserialize`: once
/// stored they cannot flow back into the UI.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecureOptions {
    pub password: String,
    pub privatekey: String,
}

impl SunflakeOptions {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SunflakeError::Config(format!("failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| SunflakeError::Config(format!("failed to parse config: {e}")))
    }

    /// Load from default locations (env var, cwd, user config dir, or
    /// defaults).
    ///
    /// Search order:
    /// 1. `SUNFLAKE_CONFIG` environment variable
    /// 2. `./sunflake.toml` (current directory)
    /// 3. `~/.config/sunflake/config.toml` (user config dir)
    /// 4. Built-in defaults
    pub fn load_default() -> Self {
        if let Ok(path) = std::env::var("SUNFLAKE_CONFIG") {
            if let Ok(cfg) = Self::from_file(&path) {
                tracing::info!(path = %path, "loaded config from SUNFLAKE_CONFIG");
                return cfg;
            }
        }

        if let Ok(cfg) = Self::from_file("sunflake.toml") {
            tracing::info!("loaded config from ./sunflake.toml");
            return cfg;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sunflake").join("config.toml");
            if let Ok(cfg) = Self::from_file(&user_config) {
                tracing::info!(path = %user_config.display(), "loaded config from user config dir");
                return cfg;
            }
        }

        tracing::debug!("no config file found, using defaults");
        Self::default()
    }
}
