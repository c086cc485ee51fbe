//! orbit-server library crate.
//!
//! This crate owns the single dashboard document on disk and exposes it to
//! browsers and other clients over a small JSON-over-HTTP API.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Client (JSON over HTTP)
//!         ↕
//! [orbit-server]
//!   ├── domain/           Pure types: ServerConfig
//!   ├── application/      Use cases: get / save / check the document
//!   └── infrastructure/
//!         ├── http/       axum router and listener
//!         └── storage/    ConfigStore (the JSON file) and the TOML settings file
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no async, no frameworks).
//! - `application` depends on `domain` and `orbit-core` only; storage is
//!   reached through the [`application::ConfigRepository`] trait.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.
//!
//! # For beginners: why this structure?
//!
//! The rules about what a valid document is, and what each endpoint answers,
//! live in plain functions that can be tested without a socket or a disk.
//! The HTTP and file code around them is thin enough to read in one sitting.

/// Domain layer: pure configuration types (no I/O).
pub mod domain;

/// Application layer: the document use cases behind each endpoint.
pub mod application;

/// Infrastructure layer: HTTP server and file storage.
pub mod infrastructure;
