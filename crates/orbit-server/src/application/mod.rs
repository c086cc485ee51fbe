//! Application layer for orbit-server.
//!
//! The application layer orchestrates the business logic: it knows *what* to
//! do for each request, but delegates *how* the document is stored to the
//! infrastructure layer.
//!
//! # Responsibilities
//!
//! - Parsing request bodies and running validation
//! - Deciding which outcome each endpoint reports
//! - Defining the `StoreError` and `ApiError` types
//!
//! # What does NOT belong here?
//!
//! - Opening sockets or files (that is infrastructure)
//! - HTTP status codes and headers (mapped in `infrastructure::http`)

pub mod config_service;

pub use config_service::{ApiError, ConfigRepository, ConfigService, StoreError};
