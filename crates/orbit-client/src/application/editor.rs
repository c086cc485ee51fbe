//! Raw-JSON editor for the whole dashboard document.
//!
//! The editor starts with the document exactly as the server sent it,
//! pretty-printed (2-space indent), so keys the typed model does not know
//! survive an unchanged save.  Every edit re-parses the text; while it does not parse, the
//! editor shows [`MSG_INVALID_SYNTAX`] and refuses to save.
//!
//! Saving is split in two so the network call can happen outside the
//! editor:
//!
//! ```text
//! begin_save() ──► payload ──► PUT /config ──► finish_saved()
//!                                         └──► fail_save(message)
//! ```
//!
//! Only syntax is checked locally.  Structural validation is the server's.

use serde_json::Value;

/// Shown while the text is not parseable JSON.
pub const MSG_INVALID_SYNTAX: &str = "Invalid JSON syntax";

#[derive(Debug, Clone)]
pub struct SettingsEditor {
    original: String,
    text: String,
    parsed: Option<Value>,
    error: Option<String>,
    saving: bool,
    has_changes: bool,
    open: bool,
}

impl SettingsEditor {
    /// Opens an editor on `document`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `document` cannot be rendered as JSON.
    pub fn open(document: &Value) -> Result<Self, serde_json::Error> {
        let original = serde_json::to_string_pretty(document)?;
        Ok(Self {
            text: original.clone(),
            original,
            parsed: Some(document.clone()),
            error: None,
            saving: false,
            has_changes: false,
            open: true,
        })
    }

    /// Replaces the text and re-parses it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.has_changes = true;
        match serde_json::from_str::<Value>(&self.text) {
            Ok(value) => {
                self.parsed = Some(value);
                self.error = None;
            }
            Err(_) => {
                self.parsed = None;
                self.error = Some(MSG_INVALID_SYNTAX.to_string());
            }
        }
    }

    /// Restores the text of the active configuration and clears the error.
    pub fn reset(&mut self) {
        let original = self.original.clone();
        self.set_text(original);
        self.has_changes = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `false` while the text does not parse or a save is in flight.
    pub fn can_save(&self) -> bool {
        self.error.is_none() && !self.saving && self.parsed.is_some()
    }

    /// Marks a save in flight and returns the payload to send, or `None`
    /// when [`can_save`](Self::can_save) is `false`.
    pub fn begin_save(&mut self) -> Option<Value> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.error = None;
        self.parsed.clone()
    }

    /// The server accepted the payload: it becomes the new baseline and the
    /// editor closes.
    pub fn finish_saved(&mut self) {
        self.saving = false;
        self.has_changes = false;
        self.original = self.text.clone();
        self.open = false;
    }

    /// The save failed; the editor stays open with `message` shown.
    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn editor() -> SettingsEditor {
        SettingsEditor::open(&orbit_core::default_document()).expect("default document renders")
    }

    #[test]
    fn test_open_pretty_prints_with_two_space_indent() {
        // Arrange / Act
        let ed = editor();

        // Assert
        assert!(ed.text().starts_with("{\n  \"site\": {\n    \"title\""));
        assert!(ed.can_save());
        assert!(!ed.has_changes());
        assert!(ed.is_open());
    }

    #[test]
    fn test_open_keeps_keys_outside_the_typed_model() {
        // Arrange
        let document = json!({
            "site": {"title": "Lab", "accent": "teal"},
            "groups": [{"name": "G", "services": [
                {"id": "a", "name": "A", "url": "u", "tags": ["nas"]}
            ]}]
        });

        // Act
        let mut ed = SettingsEditor::open(&document).unwrap();

        // Assert
        assert!(ed.text().contains("\"accent\": \"teal\""));
        assert_eq!(ed.begin_save(), Some(document));
    }

    #[test]
    fn test_unparseable_text_sets_error_and_blocks_save() {
        // Arrange
        let mut ed = editor();

        // Act
        ed.set_text("{ \"site\": ");

        // Assert
        assert_eq!(ed.error(), Some(MSG_INVALID_SYNTAX));
        assert!(!ed.can_save());
        assert!(ed.begin_save().is_none());
    }

    #[test]
    fn test_fixing_syntax_clears_error() {
        let mut ed = editor();
        ed.set_text("{");
        ed.set_text("{}");
        assert_eq!(ed.error(), None);
        assert!(ed.can_save());
    }

    #[test]
    fn test_any_edit_marks_changes() {
        let mut ed = editor();
        let same = ed.text().to_string();
        ed.set_text(same);
        assert!(ed.has_changes());
    }

    #[test]
    fn test_reset_restores_original_text() {
        // Arrange
        let mut ed = editor();
        let original = ed.text().to_string();
        ed.set_text("garbage");

        // Act
        ed.reset();

        // Assert
        assert_eq!(ed.text(), original);
        assert_eq!(ed.error(), None);
        assert!(!ed.has_changes());
    }

    #[test]
    fn test_begin_save_blocks_second_save_until_finished() {
        let mut ed = editor();
        ed.set_text(r#"{"site": {}, "groups": []}"#);

        let payload = ed.begin_save();

        assert_eq!(payload, Some(json!({"site": {}, "groups": []})));
        assert!(ed.is_saving());
        assert!(!ed.can_save());
        assert!(ed.begin_save().is_none());
    }

    #[test]
    fn test_failed_save_shows_message_and_stays_open() {
        let mut ed = editor();
        ed.begin_save();

        ed.fail_save("groups must be an array");

        assert_eq!(ed.error(), Some("groups must be an array"));
        assert!(!ed.is_saving());
        assert!(ed.is_open());
    }

    #[test]
    fn test_successful_save_closes_and_clears_changes() {
        let mut ed = editor();
        ed.set_text(r#"{"site": {}, "groups": []}"#);
        ed.begin_save();

        ed.finish_saved();

        assert!(!ed.is_open());
        assert!(!ed.has_changes());
        assert!(!ed.is_saving());
    }
}
