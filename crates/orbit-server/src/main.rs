//! Orbit dashboard server: entry point.
//!
//! This binary owns the dashboard document on disk and serves it over a small
//! JSON API that browsers and the `orbit` CLI consume.
//!
//! # Usage
//!
//! ```text
//! orbit-server [OPTIONS]
//!
//! Options:
//!   --settings    <FILE>  Optional TOML settings file
//!   --bind        <IP>    Listener address        [settings: 0.0.0.0]
//!   --port        <PORT>  Listener port           [settings: 3000]
//!   --config-path <FILE>  Dashboard JSON document [settings: config/services.json]
//! ```
//!
//! # Where each value comes from
//!
//! Later sources win:
//!
//! 1. Built-in defaults.
//! 2. The TOML settings file named by `--settings` / `ORBIT_SETTINGS`.
//! 3. CLI flags and their environment variables.
//!
//! | Variable            | Flag            |
//! |---------------------|-----------------|
//! | `ORBIT_SETTINGS`    | `--settings`    |
//! | `ORBIT_BIND`        | `--bind`        |
//! | `ORBIT_PORT`        | `--port`        |
//! | `ORBIT_CONFIG_PATH` | `--config-path` |
//!
//! The log filter is read from `RUST_LOG`; when unset, the `[logging] level`
//! from the settings file is used.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orbit_server::domain::ServerConfig;
use orbit_server::infrastructure::{load_settings, run_server, ServerSettings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Self-hosted services dashboard server.
#[derive(Debug, Parser)]
#[command(
    name = "orbit-server",
    about = "Serves and persists the Orbit dashboard configuration",
    version
)]
struct Cli {
    /// Optional TOML settings file.  A missing file is treated as empty.
    #[arg(long, env = "ORBIT_SETTINGS")]
    settings: Option<PathBuf>,

    /// IP address to bind the HTTP listener to.
    ///
    /// Use `0.0.0.0` for every interface or `127.0.0.1` for local access only.
    #[arg(long, env = "ORBIT_BIND")]
    bind: Option<String>,

    /// TCP port for the HTTP listener.
    #[arg(long, env = "ORBIT_PORT")]
    port: Option<u16>,

    /// Path of the dashboard JSON document.
    #[arg(long, env = "ORBIT_CONFIG_PATH")]
    config_path: Option<PathBuf>,
}

impl Cli {
    /// Reads the settings file named by `--settings`, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_settings(&self) -> anyhow::Result<ServerSettings> {
        match &self.settings {
            Some(path) => load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display())),
            None => Ok(ServerSettings::default()),
        }
    }

    /// Layers the CLI flags over `settings` and produces a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting bind address is not a valid IP.
    fn into_server_config(self, settings: ServerSettings) -> anyhow::Result<ServerConfig> {
        let bind = self.bind.unwrap_or(settings.server.bind_address);
        let port = self.port.unwrap_or(settings.server.port);

        let ip: IpAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: '{bind}'"))?;

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, port),
            config_path: self.config_path.unwrap_or(settings.dashboard.config_path),
            log_level: settings.logging.level,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. The settings file (if any) is loaded and the CLI layered over it.
/// 3. `tracing_subscriber` is initialised from `RUST_LOG`, falling back to the
///    configured level.
/// 4. A Ctrl+C handler clears the shared `running` flag.
/// 5. [`run_server`] serves requests until the flag is cleared.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;
    let config = cli.into_server_config(settings)?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        "Orbit server starting, bind={}, document={}",
        config.bind_addr,
        config.config_path.display()
    );

    // ── Graceful shutdown flag ─────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C, shutting down");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, running).await?;

    info!("Orbit server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
