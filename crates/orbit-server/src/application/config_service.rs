//! Document use cases: read, save, and validate-only.
//!
//! [`ConfigService`] implements what each endpoint does, independently of
//! HTTP.  It talks to storage only through the [`ConfigRepository`] trait, so
//! the tests below run against an in-memory repository.
//!
//! ```text
//! GET  → ConfigService::current()        → repository.load()
//! PUT  → ConfigService::save(body)       → parse → repository.save()
//! POST → ConfigService::check(body)      → parse → validate
//! ```
//!
//! Every method is synchronous.  The HTTP layer runs them on the blocking
//! thread pool because the real repository touches the file system.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use orbit_core::protocol::{SaveResponse, ValidateResponse};
use orbit_core::{validate, ValidationError};

// ── Error types ───────────────────────────────────────────────────────────────

/// Failures of a [`ConfigRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate failed validation; nothing was written.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// Creating the directory or writing the file failed.
    #[error("I/O error writing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A previous holder of the file lock panicked.
    #[error("config file lock poisoned")]
    LockPoisoned,
}

/// Outcome of a request that did not succeed.
///
/// The HTTP layer maps each variant to a status code and body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not parseable JSON.
    #[error("request body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The request body parsed but failed validation.
    #[error("{0}")]
    Invalid(ValidationError),

    /// The document could not be read for a reason other than "missing" or
    /// "malformed" (those degrade to the default document).
    #[error("failed to load configuration: {0}")]
    Load(#[source] StoreError),

    /// The document passed validation but could not be written.
    #[error("failed to save configuration: {0}")]
    Write(#[source] StoreError),
}

// ── Storage seam ──────────────────────────────────────────────────────────────

/// Durable access to the single dashboard document.
///
/// The infrastructure implementation is
/// [`ConfigStore`](crate::infrastructure::storage::ConfigStore).
pub trait ConfigRepository: Send + Sync {
    /// Returns the normalised document.
    ///
    /// Must degrade to the default document when the resource is missing or
    /// malformed; errors are reserved for failures of the repository itself.
    fn load(&self) -> Result<Value, StoreError>;

    /// Validates and persists `candidate`, replacing the whole document.
    ///
    /// Must return [`StoreError::Invalid`] without writing when validation
    /// fails.
    fn save(&self, candidate: &Value) -> Result<(), StoreError>;
}

// ── Service ───────────────────────────────────────────────────────────────────

/// The three document operations exposed over HTTP.
#[derive(Clone)]
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// Returns the current document.
    ///
    /// # Errors
    ///
    /// [`ApiError::Load`] when the repository itself fails.
    pub fn current(&self) -> Result<Value, ApiError> {
        self.repository.load().map_err(ApiError::Load)
    }

    /// Parses, validates, and persists `body`; echoes it back on success.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidJson`] if `body` does not parse.
    /// - [`ApiError::Invalid`] with the first violation if validation fails.
    /// - [`ApiError::Write`] if the repository cannot write the file.
    pub fn save(&self, body: &[u8]) -> Result<SaveResponse, ApiError> {
        let candidate = parse_body(body)?;

        match self.repository.save(&candidate) {
            Ok(()) => Ok(SaveResponse::saved(candidate)),
            Err(StoreError::Invalid(e)) => {
                warn!("rejected config save: {e}");
                Err(ApiError::Invalid(e))
            }
            Err(e) => Err(ApiError::Write(e)),
        }
    }

    /// Validates `body` without writing anything.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidJson`] or [`ApiError::Invalid`].
    pub fn check(&self, body: &[u8]) -> Result<ValidateResponse, ApiError> {
        let candidate = parse_body(body)?;
        validate(&candidate).map_err(|e| {
            debug!("config check failed: {e}");
            ApiError::Invalid(e)
        })?;
        Ok(ValidateResponse::valid())
    }
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("request body is not valid JSON: {e}");
        ApiError::InvalidJson(e)
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
