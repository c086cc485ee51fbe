//! Pure view derivations.
//!
//! Everything a client displays is a function of two plain inputs: the typed
//! document and the committed search query.  Keeping these derivations here,
//! with no UI framework and no I/O, means they can be unit tested directly and
//! reused by any front end (the `orbit` CLI, a web client, a TUI).

/// Assembles the complete per-frame [`dashboard::DashboardView`].
pub mod dashboard;

/// Resolves favorite ids to services.
pub mod favorites;

/// Case-insensitive search over groups.
pub mod filter;
