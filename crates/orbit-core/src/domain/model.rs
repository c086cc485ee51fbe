//! Typed dashboard document.
//!
//! These structs mirror the JSON document one-to-one.  Field names are
//! camelCase on the wire (`quickLinks`), snake_case in Rust (`quick_links`).
//!
//! # Serde default values
//!
//! Every struct is annotated with `#[serde(default)]`, so a field that is
//! absent from the JSON takes the value from the struct's `Default` impl.
//! For [`SiteConfig`] that means the built-in Orbit title, subtitle, and
//! footer; for everything else it means an empty string or an empty list.
//! This makes typed parsing lenient: the server already accepted the
//! document, and the client should render whatever it can.
//!
//! Unknown keys are ignored.
//!
//! # Foreign values
//!
//! The write path only checks the required fields, so a stored document may
//! carry `"description": null` or a favorite that is a number.  Such values
//! decode to the field's default instead of failing the whole document, and
//! list entries of the wrong shape are skipped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accent color used for a service card when the service has none.
pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";

// ── Document schema types ─────────────────────────────────────────────────────

/// Root of the dashboard document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesConfig {
    #[serde(deserialize_with = "or_default")]
    pub site: SiteConfig,
    #[serde(deserialize_with = "entries_or_empty")]
    pub quick_links: Vec<QuickLink>,
    #[serde(deserialize_with = "entries_or_empty")]
    pub groups: Vec<ServiceGroup>,
    /// Service ids pinned for prominent display, in display order.
    #[serde(deserialize_with = "entries_or_empty")]
    pub favorites: Vec<String>,
}

/// Header and footer text for the dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_title", deserialize_with = "or_default")]
    pub title: String,
    #[serde(default = "default_subtitle", deserialize_with = "or_default")]
    pub subtitle: String,
    #[serde(default = "default_footer", deserialize_with = "or_default")]
    pub footer: String,
    /// Logo image URL.  Empty or absent means "use the built-in mark".
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<String>,
}

/// One dashboard entry: a link to a self-hosted application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Service {
    /// Unique within the document; referenced from `favorites`.
    #[serde(deserialize_with = "or_default")]
    pub id: String,
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub url: String,
    #[serde(deserialize_with = "or_default")]
    pub icon: String,
    /// Hex accent color, e.g. `"#E5A00D"`.
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A named collection of services rendered together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceGroup {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "entries_or_empty")]
    pub services: Vec<Service>,
}

/// A lightweight external link shown independently of groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuickLink {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub url: String,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

pub(crate) fn default_title() -> String {
    "Orbit".to_string()
}
pub(crate) fn default_subtitle() -> String {
    "Your self-hosted services dashboard".to_string()
}
pub(crate) fn default_footer() -> String {
    "Powered by Next.js".to_string()
}
pub(crate) fn default_logo() -> String {
    String::new()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            footer: default_footer(),
            logo: Some(default_logo()),
        }
    }
}

// ── Lenient field decoding ────────────────────────────────────────────────────

/// Decodes a present field, or yields `T::default()` when its value has
/// another type (`null` included).
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decodes a list field, skipping entries that do not decode as `T`.  A
/// value that is not an array yields an empty list.
fn entries_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl ServicesConfig {
    /// Iterates over every service of every group, in document order.
    pub fn all_services(&self) -> impl Iterator<Item = &Service> {
        self.groups.iter().flat_map(|g| g.services.iter())
    }

    /// Returns the first service with the given id, if any.
    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.all_services().find(|s| s.id == id)
    }
}

impl SiteConfig {
    /// Returns the logo URL, or `None` when it is absent or empty.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.is_empty())
    }
}

impl Service {
    /// Returns the card accent color, falling back to [`DEFAULT_ACCENT_COLOR`].
    pub fn accent_color(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_ACCENT_COLOR,
        }
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
