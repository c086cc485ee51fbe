//! HTTP surface of the dashboard server.

pub mod server;

pub use server::{build_router, run_server};
