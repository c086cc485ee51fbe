//! Application layer use cases for the client.
//!
//! # What use cases does the client have?
//!
//! - **`dashboard`** – Loads the document once, holds the
//!   Loading / Failed / Ready state, derives the visible dashboard, and runs
//!   the save and check flows.  The server is reached through the
//!   `ConfigApi` trait injected at construction time.
//!
//! - **`search`** – Debounces keystrokes before they reach the filter.
//!
//! - **`editor`** – Raw-JSON editing of the whole document with syntax
//!   checking, change tracking, and reset.
//!
//! - **`theme`** – Light/dark preference with system fallback.
//!
//! **Dependency rule**: nothing here imports `crate::infrastructure`.

pub mod config_api;
pub mod dashboard;
pub mod editor;
pub mod search;
pub mod theme;

pub use config_api::{ApiClientError, ApiResponse, ConfigApi};
pub use dashboard::{CheckOutcome, ClientError, DashboardController, DashboardState};
pub use editor::{SettingsEditor, MSG_INVALID_SYNTAX};
pub use search::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use theme::{PreferenceStore, Theme, ThemeStore, THEME_KEY};
