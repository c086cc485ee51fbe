//! # orbit-core
//!
//! Shared library for Orbit containing the dashboard document model, the
//! write-path validation rules, the read-path normalisation, and the pure view
//! derivations (search filter, favorites resolution) used by the client.
//!
//! This crate is used by both the server and the client.
//! It has zero dependencies on files, sockets, HTTP frameworks, or async
//! runtimes.
//!
//! # Architecture overview (for beginners)
//!
//! Orbit is a self-hosted service dashboard: a single JSON document lists the
//! site title, some quick links, groups of services, and a list of favorite
//! service ids.  A server owns that document on disk; clients fetch it, render
//! it, filter it, and occasionally send an edited copy back.
//!
//! This crate (`orbit-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The document itself.  Typed structs ([`ServicesConfig`]
//!   and friends), the default document, the strict validator used before a
//!   write ([`validate`]), and the lenient normaliser applied after a read
//!   ([`normalize_loaded`]).
//!
//! - **`views`** – Pure functions that derive what a client shows from a
//!   document plus a search query: the filtered groups, the resolved favorites,
//!   and the complete [`DashboardView`].
//!
//! - **`protocol`** – The JSON bodies exchanged over HTTP between server and
//!   client, plus the route paths and fixed response messages.

// Declare the three top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/domain/mod.rs).
pub mod domain;
pub mod protocol;
pub mod views;

// Re-export the most-used items at the crate root so callers can write
// `orbit_core::validate` instead of `orbit_core::domain::validation::validate`.
pub use domain::model::{QuickLink, Service, ServiceGroup, ServicesConfig, SiteConfig};
pub use domain::normalize::{default_document, normalize_loaded};
pub use domain::validation::{validate, ValidationError};
pub use views::dashboard::{DashboardView, GroupView};
pub use views::favorites::resolve_favorites;
pub use views::filter::filter_groups;
