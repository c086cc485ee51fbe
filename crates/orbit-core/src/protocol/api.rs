//! JSON bodies of the dashboard HTTP API.
//!
//! The server produces these and the client consumes them, so both sides
//! share one definition.
//!
//! # Endpoints
//!
//! ```text
//! GET  /config   → 200 document                 | 500 ErrorBody{error, config}
//! PUT  /config   → 200 SaveResponse             | 400 ErrorBody{error} | 500 ErrorBody{error}
//! POST /config   → 200 ValidateResponse{valid}  | 400 ValidateResponse{valid:false, error}
//! ```
//!
//! `/api/config` is served as an alias of `/config`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical route of the configuration resource.
pub const CONFIG_ROUTE: &str = "/config";

/// Alias route kept for browser front ends that fetch `/api/config`.
pub const CONFIG_ROUTE_ALIAS: &str = "/api/config";

/// `Cache-Control` header value sent with every successful `GET`.
pub const CONFIG_CACHE_CONTROL: &str = "public, max-age=5, stale-while-revalidate=10";

/// Error text when a request body is not parseable JSON.
pub const MSG_INVALID_JSON: &str = "Invalid JSON";
/// Error text for an internal failure on the read path.
pub const MSG_LOAD_FAILED: &str = "Failed to load configuration";
/// Error text for a write failure.
pub const MSG_SAVE_FAILED: &str = "Failed to save configuration";
/// Message of a successful `PUT`.
pub const MSG_SAVED: &str = "Configuration saved successfully";
/// Message of a successful `POST`.
pub const MSG_VALID: &str = "Configuration structure is valid";

/// Body of a successful `PUT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    /// The saved document, exactly as submitted.
    pub config: Value,
}

impl SaveResponse {
    pub fn saved(config: Value) -> Self {
        Self {
            success: true,
            message: MSG_SAVED.to_string(),
            config,
        }
    }
}

/// Body of a `POST` (validate-only) response, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResponse {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: Some(MSG_VALID.to_string()),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Body of every `GET`/`PUT` failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    /// Fallback document; only sent by a failed `GET`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            config: None,
        }
    }

    pub fn with_config(error: impl Into<String>, config: Value) -> Self {
        Self {
            error: error.into(),
            config: Some(config),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
