//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is assembled at startup from built-in defaults, the optional TOML
//! settings file, and finally CLI arguments / environment variables.
//!
//! Keeping configuration as a plain struct (no global state, no environment
//! variable reads inside the domain) makes the server easy to embed in tests.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default location of the dashboard document, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/services.json";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// All runtime configuration for the dashboard server.
///
/// # Example
///
/// ```rust
/// use orbit_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 3000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The address and port the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Path of the dashboard JSON document.
    ///
    /// The file need not exist; the server serves the built-in default until
    /// the first successful save creates it (and any missing parent
    /// directories).
    pub config_path: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set (e.g. `"info"`,
    /// `"orbit_server=debug"`).
    pub log_level: String,
}

impl Default for ServerConfig {
    /// | Field       | Default                 |
    /// |-------------|-------------------------|
    /// | bind_addr   | `0.0.0.0:3000`          |
    /// | config_path | `config/services.json`  |
    /// | log_level   | `info`                  |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
