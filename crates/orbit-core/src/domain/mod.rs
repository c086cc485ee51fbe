//! Domain entities for Orbit.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from file-system APIs, network libraries, or HTTP
//!   frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//! - Defines the data types and operations that make the system uniquely what it
//!   is: in this case, a dashboard document that is lenient when read and
//!   strict when written.
//!
//! Code in outer layers (storage, HTTP, UI state) depends on the domain, but
//! the domain never depends on them.
//!
//! # Two representations of the same document
//!
//! The document exists in two forms:
//!
//! - **Untyped** (`serde_json::Value`): what the server stores, validates, and
//!   echoes.  A stored file that does not match the schema must still be served
//!   as-is, so the server never forces it through the typed structs.
//! - **Typed** ([`model::ServicesConfig`]): what a client works with once the
//!   document has arrived.  Deserialisation is lenient (missing fields take
//!   defaults) so a sloppy document still renders.

/// Typed document structs and the built-in default values.
pub mod model;

/// Read-path normalisation: merge a stored document with the defaults.
pub mod normalize;

/// Write-path validation: the closed set of schema violations.
pub mod validation;
