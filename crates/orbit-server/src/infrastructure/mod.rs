//! Infrastructure layer for orbit-server.
//!
//! The infrastructure layer handles all I/O: accepting HTTP requests and
//! reading / writing files.
//!
//! # Responsibilities
//!
//! - Binding the TCP listener and serving the axum router
//! - Mapping application outcomes to HTTP status codes, headers, and bodies
//! - Reading and atomically replacing the dashboard JSON document
//! - Reading the optional TOML settings file
//! - Handling the graceful shutdown signal
//!
//! # What does NOT belong here?
//!
//! - Validation rules (that is `orbit-core`)
//! - Deciding what each endpoint reports (that is the application layer)

pub mod http;
pub mod storage;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http::{build_router, run_server};
pub use storage::{load_settings, ConfigStore, ServerSettings};
