//! Infrastructure layer for the client.
//!
//! Contains the adapters behind the application layer's traits.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `orbit_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`http_api`** – reqwest implementation of `ConfigApi`.
//! - **`preferences`** – In-memory `PreferenceStore`.
//! - **`terminal`** – Plain-text rendering of a `DashboardView`.

pub mod http_api;
pub mod preferences;
pub mod terminal;

pub use http_api::{HttpConfigApi, DEFAULT_SERVER_URL};
pub use preferences::InMemoryPreferences;
pub use terminal::render_dashboard;
