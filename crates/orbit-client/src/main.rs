//! `orbit`: command-line client for an Orbit dashboard server.
//!
//! # Usage
//!
//! ```text
//! orbit [--server <URL>] <COMMAND>
//!
//! Commands:
//!   show  [--search <Q>]   Print the dashboard, optionally filtered
//!   check <FILE>           Ask the server whether FILE would be accepted
//!   push  <FILE>           Replace the server's document with FILE
//! ```
//!
//! `push` still sends FILE when the current document cannot be loaded, so a
//! broken document on the server can be replaced from here.
//!
//! `--server` defaults to `http://127.0.0.1:3000` and can be set with
//! `ORBIT_SERVER`.  Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `warn`, so normal output stays clean).

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use orbit_client::application::{
    CheckOutcome, DashboardController, DashboardState, SEARCH_DEBOUNCE,
};
use orbit_client::infrastructure::{render_dashboard, HttpConfigApi, DEFAULT_SERVER_URL};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Command-line client for the Orbit services dashboard.
#[derive(Debug, Parser)]
#[command(name = "orbit", version)]
struct Cli {
    /// Base URL of the orbit-server.
    #[arg(long, default_value = DEFAULT_SERVER_URL, env = "ORBIT_SERVER", global = true)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the dashboard.
    Show {
        /// Only show services whose name or description contains this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Validate a document without saving it.
    Check {
        /// JSON document to validate.
        file: PathBuf,
    },
    /// Save a document, replacing the current one.
    Push {
        /// JSON document to save.
        file: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let api = HttpConfigApi::new(&cli.server)
        .with_context(|| format!("cannot use server URL '{}'", cli.server))?;
    let mut controller = DashboardController::new(Arc::new(api));

    match cli.command {
        Command::Show { search } => show(&mut controller, search).await,
        Command::Check { file } => check(&controller, &file).await,
        Command::Push { file } => push(&mut controller, &file).await,
    }
}

async fn show(
    controller: &mut DashboardController,
    search: Option<String>,
) -> anyhow::Result<ExitCode> {
    if let DashboardState::Failed(message) = controller.load().await {
        bail!("{message}");
    }

    if let Some(query) = search {
        // The CLI has a single "keystroke": commit it once the quiet period is over.
        let typed_at = Instant::now();
        controller.type_query(query, typed_at);
        controller.tick(typed_at + SEARCH_DEBOUNCE);
    }

    match controller.view() {
        Some(view) => {
            println!("{}", render_dashboard(&view));
            Ok(ExitCode::SUCCESS)
        }
        None => bail!("dashboard is not loaded"),
    }
}

async fn check(controller: &DashboardController, file: &Path) -> anyhow::Result<ExitCode> {
    let document = read_document(file)?;
    match controller.check(&document).await? {
        CheckOutcome::Valid(message) => {
            println!("{message}");
            Ok(ExitCode::SUCCESS)
        }
        CheckOutcome::Invalid(message) => {
            eprintln!("invalid: {message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn push(controller: &mut DashboardController, file: &Path) -> anyhow::Result<ExitCode> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    if let DashboardState::Failed(message) = controller.load().await {
        warn!("current document unavailable ({message}); replacing it");
    }

    let mut editor = controller.open_replacement_editor()?;
    editor.set_text(text);
    if let Some(error) = editor.error() {
        eprintln!("{}: {error}", file.display());
        return Ok(ExitCode::FAILURE);
    }

    match controller.save(&mut editor).await {
        Ok(()) => {
            let groups = controller.config().map(|c| c.groups.len()).unwrap_or(0);
            println!("Configuration saved successfully ({groups} groups)");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let message = editor.error().map(str::to_string).unwrap_or_else(|| e.to_string());
            eprintln!("save failed: {message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reads and parses a JSON document from disk.
fn read_document(file: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", file.display()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
