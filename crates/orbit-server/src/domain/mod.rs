//! Domain layer for orbit-server.
//!
//! The domain layer contains pure types that have no dependencies on I/O,
//! networking, or external frameworks.
//!
//! # What belongs in the domain layer?
//!
//! - Configuration structures
//!
//! # What does NOT belong here?
//!
//! - Any `tokio`, `TcpListener`, or `axum` types
//! - File I/O or environment variable reading
//!
//! The dashboard document itself is domain too, but it is shared with the
//! client and therefore lives in `orbit-core`.

pub mod config;

pub use config::ServerConfig;
