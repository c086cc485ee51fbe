//! Storage infrastructure: file persistence.
//!
//! - `config_store` owns the dashboard JSON document: lenient reads, validated
//!   whole-file writes, one lock around both.
//! - `settings` reads the optional TOML file with the server's own settings.
//!
//! Keeping storage concerns here, rather than scattered throughout the
//! application, means the document could move to another backend without
//! touching the request handling.

pub mod config_store;
pub mod settings;

pub use config_store::ConfigStore;
pub use settings::{load_settings, ServerSettings, SettingsError};
