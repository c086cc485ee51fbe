//! orbit-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the `orbit` binary share the same module tree.
//!
//! # What does orbit-client do? (for beginners)
//!
//! The server owns the dashboard document.  A client:
//!
//! 1. Fetches it once with `GET /config`.
//! 2. Shows it, optionally narrowed by a debounced search query, with the
//!    favorites pinned on top.
//! 3. Lets the user edit the raw JSON and send it back with `PUT /config`,
//!    or ask the server whether it would be accepted with `POST /config`.
//! 4. Remembers a light/dark theme preference.
//!
//! Everything except the HTTP calls is plain synchronous state, so the same
//! types could drive a GUI or a TUI; the bundled `orbit` binary is a small
//! command-line front end.

/// Application layer: use cases for the client.
pub mod application;

/// Infrastructure layer: HTTP transport, preference storage, terminal output.
pub mod infrastructure;
