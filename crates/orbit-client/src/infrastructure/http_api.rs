//! reqwest implementation of [`ConfigApi`].
//!
//! Every call is a single request with no retry.  Any HTTP status is
//! returned to the caller as an [`ApiResponse`]; only failures to send the
//! request or read the body become [`ApiClientError`]s.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use orbit_core::protocol::CONFIG_ROUTE;

use crate::application::config_api::{ApiClientError, ApiResponse, ConfigApi};

/// Default server the CLI talks to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to an `orbit-server` at a base URL such as `http://nas.lan:3000`.
#[derive(Debug, Clone)]
pub struct HttpConfigApi {
    client: Client,
    endpoint: Url,
}

impl HttpConfigApi {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// [`ApiClientError::InvalidUrl`] if `base_url` is not an `http` or
    /// `https` URL, or [`ApiClientError::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str) -> Result<Self, ApiClientError> {
        let endpoint = config_endpoint(base_url)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiClientError::Transport {
                url: endpoint.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Full URL of the configuration resource.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn send(&self, method: Method, body: Option<&Value>) -> Result<ApiResponse, ApiClientError> {
        debug!("{method} {}", self.endpoint);

        let mut request = self.client.request(method, self.endpoint.clone());
        if let Some(document) = body {
            request = request.json(document);
        }

        let response = request.send().await.map_err(|e| self.transport(e))?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.transport(e))?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        debug!("{} answered {status}", self.endpoint);
        Ok(ApiResponse::new(status, body))
    }

    fn transport(&self, e: reqwest::Error) -> ApiClientError {
        ApiClientError::Transport {
            url: self.endpoint.to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl ConfigApi for HttpConfigApi {
    async fn fetch_config(&self) -> Result<ApiResponse, ApiClientError> {
        self.send(Method::GET, None).await
    }

    async fn save_config(&self, document: &Value) -> Result<ApiResponse, ApiClientError> {
        self.send(Method::PUT, Some(document)).await
    }

    async fn check_config(&self, document: &Value) -> Result<ApiResponse, ApiClientError> {
        self.send(Method::POST, Some(document)).await
    }
}

/// `http://host:3000/` → `http://host:3000/config`.
///
/// A path on the base URL is kept as a prefix: `http://host/orbit` →
/// `http://host/orbit/config`.
fn config_endpoint(base_url: &str) -> Result<Url, ApiClientError> {
    let invalid = || ApiClientError::InvalidUrl(base_url.to_string());

    let mut url = Url::parse(base_url.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    let path = format!("{}{CONFIG_ROUTE}", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
