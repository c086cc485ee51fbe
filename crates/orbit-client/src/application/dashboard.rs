//! DashboardController: the client's state machine.
//!
//! The controller owns the single piece of remote state the client cares
//! about (the dashboard document) plus the local search box.  It talks to
//! the server only through the [`ConfigApi`] trait object injected at
//! construction.
//!
//! # States
//!
//! ```text
//!            load() ok             save ok
//! Loading ─────────────► Ready ◄────────────┐
//!    │                     │                │
//!    │ load() failed       └── SettingsEditor
//!    ▼
//! Failed(message)
//! ```
//!
//! One fetch is made per `load()`; there is no retry.
//!
//! `Ready` keeps the document twice: as the server sent it, which the
//! editor works on, and decoded into [`ServicesConfig`], which the view
//! reads.  Both are replaced together on a successful save.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use orbit_core::protocol::{MSG_LOAD_FAILED, MSG_SAVE_FAILED};
use orbit_core::{default_document, DashboardView, ServicesConfig};

use crate::application::config_api::{ApiClientError, ConfigApi};
use crate::application::editor::SettingsEditor;
use crate::application::search::SearchDebouncer;

/// Error type for client use cases.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed.
    #[error(transparent)]
    Api(#[from] ApiClientError),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    /// The document does not have the expected shape.
    #[error("unexpected document shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// The editor holds no saveable payload (syntax error or save in flight).
    #[error("nothing to save")]
    NotSaveable,
}

/// Load state of the dashboard document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Failed(String),
    Ready {
        document: Value,
        config: ServicesConfig,
    },
}

impl DashboardState {
    /// Decodes `document` and pairs it with its typed form.
    fn ready(document: Value) -> Result<Self, serde_json::Error> {
        let config = serde_json::from_value::<ServicesConfig>(document.clone())?;
        Ok(Self::Ready { document, config })
    }
}

/// Outcome of `POST /config` as the client reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid(String),
    Invalid(String),
}

pub struct DashboardController {
    api: Arc<dyn ConfigApi>,
    state: DashboardState,
    search: SearchDebouncer,
}

impl DashboardController {
    /// Creates a controller in the [`DashboardState::Loading`] state.
    pub fn new(api: Arc<dyn ConfigApi>) -> Self {
        Self {
            api,
            state: DashboardState::Loading,
            search: SearchDebouncer::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The active document, once loaded.
    pub fn config(&self) -> Option<&ServicesConfig> {
        match &self.state {
            DashboardState::Ready { config, .. } => Some(config),
            _ => None,
        }
    }

    /// The active document as the server sent it, once loaded.
    pub fn document(&self) -> Option<&Value> {
        match &self.state {
            DashboardState::Ready { document, .. } => Some(document),
            _ => None,
        }
    }

    /// Fetches the document once and moves to `Ready` or `Failed`.
    pub async fn load(&mut self) -> &DashboardState {
        self.state = DashboardState::Loading;
        self.state = match self.api.fetch_config().await {
            Ok(response) if response.is_success() => match DashboardState::ready(response.body) {
                Ok(state) => {
                    if let DashboardState::Ready { config, .. } = &state {
                        info!(
                            "loaded dashboard: {} groups, {} favorites",
                            config.groups.len(),
                            config.favorites.len()
                        );
                    }
                    state
                }
                Err(e) => {
                    warn!("server document did not decode: {e}");
                    DashboardState::Failed(ClientError::Decode(e).to_string())
                }
            },
            Ok(response) => {
                warn!("GET config returned status {}", response.status);
                DashboardState::Failed(MSG_LOAD_FAILED.to_string())
            }
            Err(e) => {
                warn!("GET config failed: {e}");
                DashboardState::Failed(e.to_string())
            }
        };
        &self.state
    }

    // ── Search ────────────────────────────────────────────────────────────────

    /// Records a keystroke in the search box.
    pub fn type_query(&mut self, text: impl Into<String>, now: Instant) {
        self.search.input(text, now);
    }

    /// Commits the search text once the debounce delay has passed.  Returns
    /// `true` when the view needs redrawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.search.poll(now)
    }

    pub fn search(&self) -> &SearchDebouncer {
        &self.search
    }

    /// Derived view under the committed query, once loaded.
    pub fn view(&self) -> Option<DashboardView> {
        self.config()
            .map(|config| DashboardView::build(config, self.search.committed()))
    }

    // ── Editing ───────────────────────────────────────────────────────────────

    /// Opens a [`SettingsEditor`] on the active document.
    ///
    /// # Errors
    ///
    /// [`ClientError::Decode`] if the document cannot be rendered.  Returns
    /// `Ok(None)` while no document is loaded.
    pub fn open_editor(&self) -> Result<Option<SettingsEditor>, ClientError> {
        match self.document() {
            Some(document) => Ok(Some(SettingsEditor::open(document)?)),
            None => Ok(None),
        }
    }

    /// Opens a [`SettingsEditor`] for replacing the document outright.
    ///
    /// Starts from the active document when one is loaded and from the
    /// built-in default otherwise, so a document the client cannot load can
    /// still be overwritten.
    ///
    /// # Errors
    ///
    /// [`ClientError::Decode`] if the starting document cannot be rendered.
    pub fn open_replacement_editor(&self) -> Result<SettingsEditor, ClientError> {
        match self.document() {
            Some(document) => Ok(SettingsEditor::open(document)?),
            None => Ok(SettingsEditor::open(&default_document())?),
        }
    }

    /// Sends the editor's payload with `PUT /config`.
    ///
    /// On success the payload becomes the active document and the editor
    /// closes.  On failure the editor shows the server's `error` text, or
    /// [`MSG_SAVE_FAILED`] when there is none, and stays open.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotSaveable`] if the editor cannot save right now.
    /// - [`ClientError::Rejected`] if the server refused the document.
    /// - [`ClientError::Api`] if the request did not complete.
    pub async fn save(&mut self, editor: &mut SettingsEditor) -> Result<(), ClientError> {
        let payload = editor.begin_save().ok_or(ClientError::NotSaveable)?;

        let response = match self.api.save_config(&payload).await {
            Ok(response) => response,
            Err(e) => {
                editor.fail_save(e.to_string());
                return Err(e.into());
            }
        };

        if !response.is_success() {
            let message = response.error_message().unwrap_or(MSG_SAVE_FAILED).to_string();
            warn!("save rejected ({}): {message}", response.status);
            editor.fail_save(message.clone());
            return Err(ClientError::Rejected(message));
        }

        let state = match DashboardState::ready(payload) {
            Ok(state) => state,
            Err(e) => {
                editor.fail_save(e.to_string());
                return Err(e.into());
            }
        };

        debug!("save accepted, replacing active document");
        self.state = state;
        editor.finish_saved();
        Ok(())
    }

    /// Asks the server whether `document` would be accepted.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] if the request did not complete.
    pub async fn check(&self, document: &Value) -> Result<CheckOutcome, ClientError> {
        let response = self.api.check_config(document).await?;
        if response.is_success() && response.body.get("valid") == Some(&Value::Bool(true)) {
            let message = response
                .body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Ok(CheckOutcome::Valid(message))
        } else {
            let message = match response.error_message() {
                Some(m) => m.to_string(),
                None => format!("server answered with status {}", response.status),
            };
            Ok(CheckOutcome::Invalid(message))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config_api::{ApiResponse, MockConfigApi};
    use serde_json::json;
    use std::time::Duration;

    fn sample_document() -> Value {
        json!({
            "site": {"title": "Lab"},
            "groups": [
                {"name": "A", "services": [{"id": "x", "name": "Media Server", "url": "http://x"}]},
                {"name": "B", "services": [{"id": "y", "name": "Backup", "url": "http://y"}]}
            ],
            "favorites": ["y", "missing", "x"]
        })
    }

    fn loaded_controller() -> DashboardController {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .times(1)
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        let mut controller = DashboardController::new(Arc::new(api));
        tokio_test::block_on(controller.load());
        controller
    }

    // ── load ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_new_controller_is_loading() {
        let controller = DashboardController::new(Arc::new(MockConfigApi::new()));
        assert_eq!(controller.state(), &DashboardState::Loading);
        assert!(controller.view().is_none());
    }

    #[tokio::test]
    async fn test_load_success_moves_to_ready() {
        // Arrange
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .times(1)
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        let mut controller = DashboardController::new(Arc::new(api));

        // Act
        controller.load().await;

        // Assert
        let config = controller.config().expect("ready");
        assert_eq!(config.site.title, "Lab");
        assert_eq!(config.site.footer, "Powered by Next.js");
        assert_eq!(config.groups.len(), 2);
    }

    #[tokio::test]
    async fn test_load_non_success_status_is_generic_failure() {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(500, json!({"error": "boom"}))));
        let mut controller = DashboardController::new(Arc::new(api));

        let state = controller.load().await.clone();

        assert_eq!(state, DashboardState::Failed(MSG_LOAD_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_load_transport_error_reports_error_text() {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config().returning(|| {
            Err(ApiClientError::Transport {
                url: "http://127.0.0.1:3000/config".to_string(),
                message: "connection refused".to_string(),
            })
        });
        let mut controller = DashboardController::new(Arc::new(api));

        let state = controller.load().await.clone();

        match state {
            DashboardState::Failed(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    // ── view / search ─────────────────────────────────────────────────────────

    #[test]
    fn test_view_shows_favorites_in_order_before_search() {
        let controller = loaded_controller();

        let view = controller.view().expect("ready");

        let ids: Vec<&str> = view.favorites.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x"]);
        assert_eq!(view.groups.len(), 2);
    }

    #[test]
    fn test_search_applies_only_after_debounce() {
        // Arrange
        let mut controller = loaded_controller();
        let t0 = Instant::now();

        // Act
        controller.type_query("med", t0);
        let before = controller.view().unwrap();
        let changed = controller.tick(t0 + Duration::from_millis(150));
        let after = controller.view().unwrap();

        // Assert
        assert_eq!(before.groups.len(), 2);
        assert!(changed);
        assert_eq!(after.groups.len(), 1);
        assert_eq!(after.groups[0].group.name, "A");
        assert!(after.favorites.is_empty());
    }

    #[test]
    fn test_search_without_match_reports_no_results() {
        let mut controller = loaded_controller();
        let t0 = Instant::now();

        controller.type_query("zzz", t0);
        controller.tick(t0 + Duration::from_secs(1));

        assert!(controller.view().unwrap().no_results);
    }

    // ── save ──────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_save_success_replaces_active_document_and_closes_editor() {
        // Arrange
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        api.expect_save_config()
            .withf(|doc| doc["site"]["title"] == "Renamed")
            .times(1)
            .returning(|doc| Ok(ApiResponse::new(200, json!({"success": true, "config": doc}))));
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_editor().unwrap().expect("loaded");

        // Act
        editor.set_text(r#"{"site": {"title": "Renamed"}, "groups": []}"#);
        let result = controller.save(&mut editor).await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(controller.config().unwrap().site.title, "Renamed");
        assert!(controller.config().unwrap().groups.is_empty());
        assert!(!editor.is_open());
    }

    #[tokio::test]
    async fn test_save_rejection_shows_server_error() {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        api.expect_save_config().returning(|_| {
            Ok(ApiResponse::new(400, json!({"error": "groups must be an array"})))
        });
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_editor().unwrap().unwrap();
        editor.set_text(r#"{"site": {}}"#);

        let result = controller.save(&mut editor).await;

        assert!(matches!(result, Err(ClientError::Rejected(ref m)) if m == "groups must be an array"));
        assert_eq!(editor.error(), Some("groups must be an array"));
        assert!(editor.is_open());
        assert_eq!(controller.config().unwrap().site.title, "Lab");
    }

    #[tokio::test]
    async fn test_save_rejection_without_error_field_uses_fallback() {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        api.expect_save_config()
            .returning(|_| Ok(ApiResponse::new(500, Value::Null)));
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_editor().unwrap().unwrap();

        let result = controller.save(&mut editor).await;

        assert!(matches!(result, Err(ClientError::Rejected(_))));
        assert_eq!(editor.error(), Some(MSG_SAVE_FAILED));
    }

    #[tokio::test]
    async fn test_save_with_syntax_error_never_calls_server() {
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(200, sample_document())));
        api.expect_save_config().times(0);
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_editor().unwrap().unwrap();
        editor.set_text("{");

        let result = controller.save(&mut editor).await;

        assert!(matches!(result, Err(ClientError::NotSaveable)));
    }

    #[test]
    fn test_open_editor_before_load_is_none() {
        let controller = DashboardController::new(Arc::new(MockConfigApi::new()));
        assert!(controller.open_editor().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unchanged_save_keeps_unknown_keys() {
        // Arrange
        let document = json!({
            "site": {"title": "Lab", "accent": "teal"},
            "quickLinks": [],
            "groups": [{"name": "A", "services": [
                {"id": "x", "name": "X", "url": "http://x", "tags": ["media"]}
            ]}],
            "favorites": []
        });
        let served = document.clone();
        let expected = document.clone();
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(move || Ok(ApiResponse::new(200, served.clone())));
        api.expect_save_config()
            .withf(move |doc| *doc == expected)
            .times(1)
            .returning(|doc| Ok(ApiResponse::new(200, json!({"success": true, "config": doc}))));
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_editor().unwrap().unwrap();

        // Act
        let result = controller.save(&mut editor).await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(controller.document(), Some(&document));
        assert_eq!(controller.config().unwrap().site.title, "Lab");
    }

    #[tokio::test]
    async fn test_document_with_null_and_foreign_entries_loads() {
        // Arrange
        let mut api = MockConfigApi::new();
        api.expect_fetch_config().returning(|| {
            Ok(ApiResponse::new(
                200,
                json!({
                    "site": {"title": "T"},
                    "quickLinks": [],
                    "groups": [{"name": "G", "services": [
                        {"id": "a", "name": "A", "url": "u", "description": null}
                    ]}],
                    "favorites": [1]
                }),
            ))
        });
        let mut controller = DashboardController::new(Arc::new(api));

        // Act
        controller.load().await;

        // Assert
        let config = controller.config().expect("ready");
        assert_eq!(config.groups[0].services[0].description, "");
        assert!(config.favorites.is_empty());
        assert!(controller.open_editor().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_replacement_editor_saves_after_failed_load() {
        // Arrange
        let mut api = MockConfigApi::new();
        api.expect_fetch_config()
            .returning(|| Ok(ApiResponse::new(500, json!({"error": "boom"}))));
        api.expect_save_config()
            .times(1)
            .returning(|doc| Ok(ApiResponse::new(200, json!({"success": true, "config": doc}))));
        let mut controller = DashboardController::new(Arc::new(api));
        controller.load().await;
        let mut editor = controller.open_replacement_editor().unwrap();

        // Act
        editor.set_text(r#"{"site": {"title": "Fixed"}, "groups": []}"#);
        let result = controller.save(&mut editor).await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(controller.config().unwrap().site.title, "Fixed");
    }

    // ── check ─────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_check_reports_valid_and_invalid() {
        let mut api = MockConfigApi::new();
        api.expect_check_config().times(2).returning(|doc| {
            if doc.get("groups").is_some() {
                Ok(ApiResponse::new(
                    200,
                    json!({"valid": true, "message": "Configuration structure is valid"}),
                ))
            } else {
                Ok(ApiResponse::new(
                    400,
                    json!({"valid": false, "error": "groups must be an array"}),
                ))
            }
        });
        let controller = DashboardController::new(Arc::new(api));

        let ok = controller.check(&json!({"site": {}, "groups": []})).await.unwrap();
        let bad = controller.check(&json!({"site": {}})).await.unwrap();

        assert_eq!(ok, CheckOutcome::Valid("Configuration structure is valid".to_string()));
        assert_eq!(bad, CheckOutcome::Invalid("groups must be an array".to_string()));
    }
}
