//! Write-path validation of a candidate dashboard document.
//!
//! [`validate`] takes an arbitrary JSON value (it is not yet trusted to be an
//! object) and either accepts it or returns the *first* schema violation it
//! finds.  Checks run in a fixed priority order:
//!
//! 1. the root is an object (an array root has no `site` and fails step 2)
//! 2. `site` is an object or an array
//! 3. `groups` is an array
//! 4. each group in order: `name`, then `services`, then each service's
//!    `id`, `name`, `url`
//! 5. `quickLinks`, if set, is an array
//! 6. `favorites`, if set, is an array
//!
//! Errors never accumulate: the first failing check short-circuits the rest.
//!
//! The validator is pure and total.  It performs no I/O and never panics for
//! any `serde_json::Value`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::normalize::is_set;

/// The closed set of schema violations.
///
/// The `Display` text of each variant is the message shown to the user and
/// returned in HTTP error bodies.  Group and service positions are 1-based.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate is a scalar or `null`.
    #[error("Configuration must be an object")]
    NotAnObject,

    /// `site` is absent, or is neither an object nor an array.
    #[error("site configuration is required")]
    MissingSite,

    /// `groups` is absent or is not an array.
    #[error("groups must be an array")]
    GroupsNotArray,

    /// A group has no usable `name`.
    #[error("Group {index}: name is required")]
    GroupNameMissing { index: usize },

    /// A group's `services` is absent or is not an array.
    #[error("Group \"{group}\": services must be an array")]
    ServicesNotArray { group: String },

    /// A service has no usable `id`.
    #[error("Group \"{group}\", Service {index}: id is required")]
    ServiceIdMissing { group: String, index: usize },

    /// A service has no usable `name`.
    #[error("Group \"{group}\", Service \"{id}\": name is required")]
    ServiceNameMissing { group: String, id: String },

    /// A service has no usable `url`.
    #[error("Group \"{group}\", Service \"{id}\": url is required")]
    ServiceUrlMissing { group: String, id: String },

    /// `quickLinks` is set but is not an array.
    #[error("quickLinks must be an array")]
    QuickLinksNotArray,

    /// `favorites` is set but is not an array.
    #[error("favorites must be an array")]
    FavoritesNotArray,
}

impl ValidationError {
    /// Name of the offending field, without its path.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAnObject => "",
            Self::MissingSite => "site",
            Self::GroupsNotArray => "groups",
            Self::GroupNameMissing { .. } | Self::ServiceNameMissing { .. } => "name",
            Self::ServicesNotArray { .. } => "services",
            Self::ServiceIdMissing { .. } => "id",
            Self::ServiceUrlMissing { .. } => "url",
            Self::QuickLinksNotArray => "quickLinks",
            Self::FavoritesNotArray => "favorites",
        }
    }
}

/// Checks `candidate` against the dashboard schema.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, in the priority order listed
/// in the module documentation.
///
/// # Example
///
/// ```rust
/// use orbit_core::{validate, ValidationError};
/// use serde_json::json;
///
/// assert!(validate(&json!({"site": {}, "groups": []})).is_ok());
/// assert_eq!(validate(&json!({"site": {}})), Err(ValidationError::GroupsNotArray));
/// ```
pub fn validate(candidate: &Value) -> Result<(), ValidationError> {
    let root = match candidate {
        Value::Object(root) => root,
        Value::Array(_) => return Err(ValidationError::MissingSite),
        _ => return Err(ValidationError::NotAnObject),
    };

    if !root
        .get("site")
        .is_some_and(|site| site.is_object() || site.is_array())
    {
        return Err(ValidationError::MissingSite);
    }

    let groups = root
        .get("groups")
        .and_then(Value::as_array)
        .ok_or(ValidationError::GroupsNotArray)?;

    for (i, group) in groups.iter().enumerate() {
        validate_group(i + 1, group)?;
    }

    if root.get("quickLinks").is_some_and(|v| is_set(v) && !v.is_array()) {
        return Err(ValidationError::QuickLinksNotArray);
    }

    if root.get("favorites").is_some_and(|v| is_set(v) && !v.is_array()) {
        return Err(ValidationError::FavoritesNotArray);
    }

    Ok(())
}

fn validate_group(index: usize, group: &Value) -> Result<(), ValidationError> {
    let fields = group.as_object();

    let name = required_str(fields, "name").ok_or(ValidationError::GroupNameMissing { index })?;

    let services = fields
        .and_then(|g| g.get("services"))
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::ServicesNotArray {
            group: name.to_string(),
        })?;

    for (j, service) in services.iter().enumerate() {
        let fields = service.as_object();

        let id = required_str(fields, "id").ok_or_else(|| ValidationError::ServiceIdMissing {
            group: name.to_string(),
            index: j + 1,
        })?;

        if required_str(fields, "name").is_none() {
            return Err(ValidationError::ServiceNameMissing {
                group: name.to_string(),
                id: id.to_string(),
            });
        }

        if required_str(fields, "url").is_none() {
            return Err(ValidationError::ServiceUrlMissing {
                group: name.to_string(),
                id: id.to_string(),
            });
        }
    }

    Ok(())
}

/// Returns the field as a `&str` when it is a non-empty string.
fn required_str<'a>(fields: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a str> {
    fields
        .and_then(|f| f.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
