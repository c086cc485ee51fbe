//! Optional TOML settings file for the server process.
//!
//! The settings file is separate from the dashboard document: it describes
//! how the *process* runs (where to listen, which document to serve, how
//! verbosely to log), not what the dashboard shows.
//!
//! ```toml
//! [server]
//! bind_address = "127.0.0.1"
//! port = 8080
//!
//! [dashboard]
//! config_path = "/srv/orbit/services.json"
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Every table and every key is optional.  Absent keys take the defaults from
//! [`crate::domain::config`], so an empty file and a missing file are
//! equivalent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::config::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
};

/// Error type for reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error other than "not found".
    #[error("I/O error reading settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Settings schema ───────────────────────────────────────────────────────────

/// Top-level settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    #[serde(default)]
    pub server: ListenSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// `[server]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListenSettings {
    /// IP address to bind.  `"0.0.0.0"` binds all interfaces.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// TCP port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// `[dashboard]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    /// Location of the JSON document.
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads settings from `path`, returning [`ServerSettings::default()`] if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<ServerSettings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ServerSettings::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
