//! Favorites resolution.

use crate::domain::model::{Service, ServicesConfig};

/// Resolves `config.favorites` to services.
///
/// The result follows the order of the `favorites` list, not the order the
/// services appear in groups.  Each id resolves to the first service with that
/// id across all groups.  Ids that match no service are skipped silently; a
/// dangling favorite is not an error.
pub fn resolve_favorites(config: &ServicesConfig) -> Vec<&Service> {
    config
        .favorites
        .iter()
        .filter_map(|id| config.find_service(id))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
