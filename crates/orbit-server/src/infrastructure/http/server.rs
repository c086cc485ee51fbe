//! axum router and listener for the configuration resource.
//!
//! This module is responsible for:
//!
//! 1. Mapping `GET`, `PUT` and `POST` on `/config` (and the `/api/config`
//!    alias) to the [`ConfigService`] use cases.
//! 2. Running each use case on Tokio's blocking pool, since the store does
//!    synchronous file I/O under a `std::sync::Mutex`.
//! 3. Translating [`ApiError`] into a status code and a JSON body.
//! 4. Binding the listener and serving until the `running` flag is cleared.
//!
//! # Status mapping
//!
//! | Outcome                         | GET | PUT | POST |
//! |---------------------------------|-----|-----|------|
//! | success                         | 200 | 200 | 200  |
//! | body is not JSON                |  -  | 400 | 400  |
//! | body fails validation           |  -  | 400 | 400  |
//! | write failed                    |  -  | 500 |  -   |
//! | store or worker failure         | 500 | 500 | 500  |

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use orbit_core::default_document;
use orbit_core::protocol::{
    ErrorBody, ValidateResponse, CONFIG_CACHE_CONTROL, CONFIG_ROUTE, CONFIG_ROUTE_ALIAS,
    MSG_INVALID_JSON, MSG_LOAD_FAILED, MSG_SAVE_FAILED,
};

use crate::application::{ApiError, ConfigService};
use crate::domain::ServerConfig;
use crate::infrastructure::storage::ConfigStore;

/// How often the shutdown watcher polls the `running` flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(200);

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the application router around `service`.
///
/// The router has no listener attached, so tests can drive it directly with
/// `tower::ServiceExt::oneshot`.
pub fn build_router(service: ConfigService) -> Router {
    Router::new()
        .route(
            CONFIG_ROUTE,
            get(get_config).put(put_config).post(post_config),
        )
        .route(
            CONFIG_ROUTE_ALIAS,
            get(get_config).put(put_config).post(post_config),
        )
        .with_state(service)
}

/// Serves the dashboard API until `running` is set to `false`.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port is
/// already in use) or if the server fails while running.
pub async fn run_server(config: ServerConfig, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let store = ConfigStore::new(&config.config_path);
    let router = build_router(ConfigService::new(Arc::new(store)));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    let local: SocketAddr = listener.local_addr().unwrap_or(config.bind_addr);
    info!(
        "dashboard API listening on http://{local}, document at {}",
        config.config_path.display()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_stop(running))
        .await
        .context("HTTP server error")?;

    info!("HTTP listener closed");
    Ok(())
}

async fn wait_for_stop(running: Arc<AtomicBool>) {
    while running.load(Ordering::Relaxed) {
        tokio::time::sleep(SHUTDOWN_POLL).await;
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn get_config(State(service): State<ConfigService>) -> Response {
    match tokio::task::spawn_blocking(move || service.current()).await {
        Ok(Ok(document)) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CONFIG_CACHE_CONTROL)],
            Json(document),
        )
            .into_response(),
        Ok(Err(e)) => {
            error!("GET config failed: {e}");
            load_failed()
        }
        Err(e) => {
            error!("GET config worker failed: {e}");
            load_failed()
        }
    }
}

async fn put_config(State(service): State<ConfigService>, body: Bytes) -> Response {
    match tokio::task::spawn_blocking(move || service.save(&body)).await {
        Ok(Ok(saved)) => (StatusCode::OK, Json(saved)).into_response(),
        Ok(Err(ApiError::InvalidJson(_))) => {
            error_response(StatusCode::BAD_REQUEST, MSG_INVALID_JSON)
        }
        Ok(Err(ApiError::Invalid(e))) => {
            warn!("PUT config rejected: {e}");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Ok(Err(e)) => {
            error!("PUT config failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED)
        }
        Err(e) => {
            error!("PUT config worker failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED)
        }
    }
}

async fn post_config(State(service): State<ConfigService>, body: Bytes) -> Response {
    match tokio::task::spawn_blocking(move || service.check(&body)).await {
        Ok(Ok(checked)) => (StatusCode::OK, Json(checked)).into_response(),
        Ok(Err(ApiError::InvalidJson(_))) => invalid(MSG_INVALID_JSON),
        Ok(Err(ApiError::Invalid(e))) => {
            warn!("POST config rejected: {e}");
            invalid(e.to_string())
        }
        Ok(Err(e)) => {
            error!("POST config failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_LOAD_FAILED)
        }
        Err(e) => {
            error!("POST config worker failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_LOAD_FAILED)
        }
    }
}

// ── Response helpers ──────────────────────────────────────────────────────────

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

fn load_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::with_config(MSG_LOAD_FAILED, default_document())),
    )
        .into_response()
}

fn invalid(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidateResponse::invalid(message)),
    )
        .into_response()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
