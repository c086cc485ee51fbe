//! Protocol module containing the HTTP route paths and JSON response bodies.

pub mod api;

pub use api::*;
