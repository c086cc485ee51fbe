//! The seam between client use cases and the HTTP transport.
//!
//! [`ConfigApi`] describes the three exchanges the client makes with the
//! server.  The reqwest implementation lives in
//! [`crate::infrastructure::http_api`]; tests substitute a mockall mock.
//!
//! Implementations report *transport* failures as errors and return every
//! HTTP response, success or not, as an [`ApiResponse`].  Deciding what a
//! non-success status means is the caller's job.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure to complete an exchange with the server.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server URL could not be combined with the route.
    #[error("invalid server URL '{0}'")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

/// Status and JSON body of one HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed body, or `Value::Null` when the body was empty or not JSON.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body's `error` field, when it is a string.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Client side of `GET`, `PUT` and `POST /config`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// `GET /config`.
    async fn fetch_config(&self) -> Result<ApiResponse, ApiClientError>;

    /// `PUT /config` with `document` as the body.
    async fn save_config(&self, document: &Value) -> Result<ApiResponse, ApiClientError>;

    /// `POST /config` with `document` as the body.
    async fn check_config(&self, document: &Value) -> Result<ApiResponse, ApiClientError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success_covers_2xx_only() {
        assert!(ApiResponse::new(200, Value::Null).is_success());
        assert!(ApiResponse::new(204, Value::Null).is_success());
        assert!(!ApiResponse::new(400, Value::Null).is_success());
        assert!(!ApiResponse::new(500, Value::Null).is_success());
    }

    #[test]
    fn test_error_message_reads_string_field() {
        let r = ApiResponse::new(400, json!({"error": "groups must be an array"}));
        assert_eq!(r.error_message(), Some("groups must be an array"));
    }

    #[test]
    fn test_error_message_absent_or_non_string_is_none() {
        assert_eq!(ApiResponse::new(500, json!({})).error_message(), None);
        assert_eq!(ApiResponse::new(500, json!({"error": 42})).error_message(), None);
        assert_eq!(ApiResponse::new(500, Value::Null).error_message(), None);
    }
}
