//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use burrow_protocol::AddressParser;

use crate::error::CoreError;
use crate::Result;

/// Environment variable overriding the start page
pub const HOME_ENV: &str = "BURROW_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host used when an address names none
    pub default_host: String,
    /// Port used when an address names none or an unusable one
    pub default_port: u16,
    /// Address opened on start
    pub home: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Responses are truncated past this size
    pub max_response_bytes: u64,
}

impl Config {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Load the user's config file if there is one, then apply environment overrides
    pub fn load_or_default() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };

        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.trim().is_empty() {
                config.home = home;
            }
        }

        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("burrow").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_host.trim().is_empty() {
            return Err(CoreError::Config("default_host cannot be empty".to_string()));
        }
        if self.default_port == 0 {
            return Err(CoreError::Config("default_port must be 1-65535".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(CoreError::Config("timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn address_parser(&self) -> AddressParser {
        AddressParser::new(self.default_host.clone(), self.default_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_host: "gopher.navan.dev".to_string(),
            default_port: 70,
            home: "gopher://gopher.navan.dev:70".to_string(),
            timeout_ms: 10_000,
            max_response_bytes: 4 * 1024 * 1024,
        }
    }
}

// Per-platform config directory lookup
mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".config"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
