//! JSON-file persistence of the dashboard document.
//!
//! [`ConfigStore`] owns exactly one file.  Its contract is asymmetric:
//!
//! - **Read** never fails outward.  A missing file, an unreadable file, or a
//!   file that is not valid JSON all yield the built-in default document
//!   (logged for the operator).  A file that parses is passed through
//!   [`normalize_loaded`], which fills in defaults but does not type check
//!   the lists.
//! - **Write** is strict.  The candidate must pass
//!   [`validate`](orbit_core::validate); otherwise nothing is written.  A
//!   valid candidate replaces the whole file, pretty-printed with 2-space
//!   indentation.
//!
//! # Atomic replace
//!
//! The new content is written to a sibling `<name>.tmp` file which is then
//! renamed over the target.  On the same file system a rename is atomic, so a
//! concurrent reader sees either the old document or the new one, never a
//! truncated mix.
//!
//! # Locking
//!
//! A `std::sync::Mutex<()>` is held for the whole of every load and save.
//! Saves are therefore serialised against each other and against loads: two
//! racing writers each produce a complete file, and the later one wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::{error, info, warn};

use orbit_core::{default_document, normalize_loaded, validate};

use crate::application::{ConfigRepository, StoreError};

/// File-backed [`ConfigRepository`].
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ConfigStore {
    /// Creates a store for the document at `path`.  Nothing is read or
    /// created until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the managed document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Reads and normalises the document, degrading to the default.
    fn read_document(&self) -> Value {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "config file not found at {}, using default config",
                    self.path.display()
                );
                return default_document();
            }
            Err(e) => {
                error!("error reading config file {}: {e}", self.path.display());
                return default_document();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(stored) => normalize_loaded(stored),
            Err(e) => {
                error!("error parsing config file {}: {e}", self.path.display());
                default_document()
            }
        }
    }

    /// Writes `content` to a temporary sibling and renames it over the target.
    fn replace_file(&self, content: &str) -> Result<(), StoreError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let tmp = temp_path(&self.path);
        std::fs::write(&tmp, content).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|source| {
            // Best effort: do not leave the temporary file behind.
            let _ = std::fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl ConfigRepository for ConfigStore {
    fn load(&self) -> Result<Value, StoreError> {
        let _guard = self.guard()?;
        Ok(self.read_document())
    }

    fn save(&self, candidate: &Value) -> Result<(), StoreError> {
        validate(candidate)?;

        let content = serde_json::to_string_pretty(candidate)?;

        let _guard = self.guard()?;
        self.replace_file(&content).inspect_err(|e| {
            error!("error saving config file: {e}");
        })?;

        info!(
            "saved config to {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}

/// `services.json` → `services.json.tmp`, in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::ValidationError;
    use serde_json::json;

    fn full_document() -> Value {
        json!({
            "site": {
                "title": "Lab",
                "subtitle": "Rack one",
                "footer": "Hosted at home",
                "logo": ""
            },
            "quickLinks": [{"name": "Router", "url": "http://192.168.1.1"}],
            "groups": [{
                "name": "Media",
                "icon": "🎬",
                "services": [{
                    "id": "plex",
                    "name": "Plex",
                    "description": "Media server",
                    "url": "http://localhost:32400",
                    "icon": "🎬",
                    "color": "#E5A00D"
                }]
            }],
            "favorites": ["plex"]
        })
    }

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("config").join("services.json"))
    }

    // ── load ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_returns_exact_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Act
        let doc = store.load().unwrap();

        // Assert
        assert_eq!(
            doc,
            json!({
                "site": {
                    "title": "Orbit",
                    "subtitle": "Your self-hosted services dashboard",
                    "footer": "Powered by Next.js",
                    "logo": ""
                },
                "quickLinks": [],
                "groups": [],
                "favorites": []
            })
        );
    }

    #[test]
    fn test_load_partial_site_merges_with_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.json");
        std::fs::write(&path, r#"{"site": {"title": "Custom"}}"#).unwrap();
        let store = ConfigStore::new(&path);

        // Act
        let doc = store.load().unwrap();

        // Assert
        assert_eq!(doc["site"]["title"], "Custom");
        assert_eq!(doc["site"]["subtitle"], "Your self-hosted services dashboard");
        assert_eq!(doc["site"]["footer"], "Powered by Next.js");
        assert_eq!(doc["quickLinks"], json!([]));
        assert_eq!(doc["groups"], json!([]));
        assert_eq!(doc["favorites"], json!([]));
    }

    #[test]
    fn test_load_malformed_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let doc = ConfigStore::new(&path).load().unwrap();

        assert_eq!(doc, default_document());
    }

    #[test]
    fn test_load_does_not_type_check_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.json");
        std::fs::write(&path, r#"{"site": {}, "groups": {"oops": true}}"#).unwrap();

        let doc = ConfigStore::new(&path).load().unwrap();

        assert_eq!(doc["groups"], json!({"oops": true}));
    }

    // ── save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_then_load_round_trips() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let original = full_document();

        // Act
        store.save(&original).expect("save must succeed");
        let loaded = store.load().unwrap();

        // Assert
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("a").join("b").join("services.json"));

        store.save(&full_document()).expect("save must succeed");

        assert!(store.path().exists());
    }

    #[test]
    fn test_save_writes_two_space_pretty_json() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Act
        store.save(&json!({"site": {}, "groups": []})).unwrap();
        let written = std::fs::read_to_string(store.path()).unwrap();

        // Assert
        assert_eq!(written, "{\n  \"site\": {},\n  \"groups\": []\n}");
    }

    #[test]
    fn test_save_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&json!({"site": {}, "groups": [], "favorites": [], "quickLinks": []})).unwrap();
        let written = std::fs::read_to_string(store.path()).unwrap();

        let favorites_at = written.find("favorites").unwrap();
        let quick_links_at = written.find("quickLinks").unwrap();
        assert!(favorites_at < quick_links_at);
    }

    #[test]
    fn test_save_invalid_candidate_writes_nothing() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // Act
        let result = store.save(&json!({"site": {}}));

        // Assert
        assert!(matches!(
            result,
            Err(StoreError::Invalid(ValidationError::GroupsNotArray))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_document_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&full_document()).unwrap();

        let replacement = json!({"site": {"title": "Second"}, "groups": []});
        store.save(&replacement).unwrap();

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, replacement);
    }

    #[test]
    fn test_save_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&full_document()).unwrap();

        assert!(!temp_path(store.path()).exists());
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        // Arrange: the "parent directory" is an existing regular file.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let store = ConfigStore::new(blocker.join("services.json"));

        // Act
        let result = store.save(&full_document());

        // Assert
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_concurrent_saves_each_leave_a_complete_document() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));

        // Act
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let doc = json!({"site": {"title": format!("writer-{i}")}, "groups": []});
                    store.save(&doc).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // Assert: whichever writer won, the file parses and is one of theirs.
        let loaded = store.load().unwrap();
        let title = loaded["site"]["title"].as_str().unwrap();
        assert!(title.starts_with("writer-"));
    }

    #[test]
    fn test_temp_path_appends_suffix_in_same_directory() {
        let tmp = temp_path(Path::new("/srv/orbit/services.json"));
        assert_eq!(tmp, PathBuf::from("/srv/orbit/services.json.tmp"));
    }
}
