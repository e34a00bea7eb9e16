//! Configuration management
//!
//! Settings are read from the first of:
//!
//! 1. the file given with `--config`
//! 2. `qa-checklist.toml` in the working directory
//! 3. `<config dir>/qa-checklist/config.toml` (XDG standard on Linux)
//!
//! Every field has a default, so an absent file means default settings.

use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "net")]
use std::time::Duration;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::models::PageLayout;
use crate::core::services::{DEFAULT_ENDPOINTS, PolicyKind};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "qa-checklist.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which checklist to use
    #[serde(default)]
    pub checklist: ChecklistConfig,
    /// Export validation
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Public address lookup
    #[serde(default)]
    pub network: NetworkConfig,
    /// Page geometry
    #[serde(default)]
    pub layout: PageLayout,
    /// Where exports are written
    #[serde(default)]
    pub output: OutputConfig,
}

/// Checklist selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistConfig {
    /// Definition file; the built-in EMV checklist when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<PathBuf>,
}

/// Validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Per-item policy applied before export
    #[serde(default)]
    pub policy: PolicyKind,
}

/// Address lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Whether to look up the public address at all
    pub enabled: bool,
    /// Endpoints tried in order
    pub endpoints: Vec<String>,
    /// Attempts per endpoint
    pub attempts: u32,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
    /// Pause between attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoints: DEFAULT_ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
            attempts: 2,
            timeout_secs: 5,
            retry_delay_ms: 500,
        }
    }
}

#[cfg(feature = "net")]
impl NetworkConfig {
    /// Lookup settings derived from this config
    #[must_use]
    pub fn lookup(&self) -> crate::core::services::AddressLookup {
        crate::core::services::AddressLookup {
            endpoints: self.endpoints.clone(),
            attempts: self.attempts,
            timeout: self.timeout(),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    /// Per-attempt timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for exported files; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Path of the per-user config file
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qa-checklist").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist; otherwise the local and per-user files
    /// are tried and defaults are used when neither exists.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(Self::user_config_path());
        for path in candidates {
            if path.is_file() {
                return Self::load_file(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
