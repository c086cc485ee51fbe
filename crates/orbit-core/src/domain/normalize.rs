//! Read-path normalisation of a stored dashboard document.
//!
//! A document read from disk is trusted only as far as its outer shape: the
//! result of [`normalize_loaded`] always has `site`, `quickLinks`, `groups`,
//! and `favorites`, but the *contents* of the three lists are passed through
//! untouched.  Type checking of those lists is the job of
//! [`validate`](crate::domain::validation::validate), which runs on the write
//! path only.  A loaded document is therefore not guaranteed to pass
//! validation.
//!
//! # Merge policy
//!
//! ```text
//! site        = default site, then each stored site key written over it
//! quickLinks  = stored value if set, else []
//! groups      = stored value if set, else []
//! favorites   = stored value if set, else []
//! other keys  = dropped
//! ```
//!
//! "Set" means present and not one of the empty-ish JSON values `null`,
//! `false`, `0`, or `""` (see [`is_set`]).

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::domain::model::{default_footer, default_logo, default_subtitle, default_title};

/// Returns the built-in document served when nothing usable is on disk.
///
/// ```rust
/// let doc = orbit_core::default_document();
/// assert_eq!(doc["site"]["title"], "Orbit");
/// assert_eq!(doc["groups"], serde_json::json!([]));
/// ```
pub fn default_document() -> Value {
    json!({
        "site": default_site(),
        "quickLinks": [],
        "groups": [],
        "favorites": []
    })
}

/// Merges a parsed on-disk document with the defaults.
///
/// Total over every JSON value: a root that is not an object yields
/// [`default_document`].
pub fn normalize_loaded(stored: Value) -> Value {
    let Value::Object(mut root) = stored else {
        debug!("stored document root is not an object; using defaults");
        return default_document();
    };

    let mut site = default_site();
    match root.remove("site") {
        Some(Value::Object(stored_site)) => {
            for (key, value) in stored_site {
                site.insert(key, value);
            }
        }
        Some(other) if is_set(&other) => {
            debug!("stored `site` is not an object; keeping default site");
        }
        _ => {}
    }

    json!({
        "site": site,
        "quickLinks": list_or_empty(root.remove("quickLinks")),
        "groups": list_or_empty(root.remove("groups")),
        "favorites": list_or_empty(root.remove("favorites"))
    })
}

/// Returns `true` for every value except `null`, `false`, `0`, and `""`.
///
/// Both the loader ("fall back to `[]` when not set") and the validator
/// ("`quickLinks`, if set, must be an array") use this notion of presence.
pub(crate) fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn default_site() -> Map<String, Value> {
    let mut site = Map::new();
    site.insert("title".into(), Value::String(default_title()));
    site.insert("subtitle".into(), Value::String(default_subtitle()));
    site.insert("footer".into(), Value::String(default_footer()));
    site.insert("logo".into(), Value::String(default_logo()));
    site
}

fn list_or_empty(value: Option<Value>) -> Value {
    match value {
        Some(v) if is_set(&v) => v,
        _ => Value::Array(Vec::new()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
