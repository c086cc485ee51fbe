//! Search filter over service groups.

use crate::domain::model::ServiceGroup;

/// Filters `groups` down to the services matching `query`.
///
/// - A query that is empty or whitespace-only returns the groups unchanged.
/// - Otherwise the query is lowercased (but not trimmed) and matched as a
///   substring of each service's lowercased name or description.
/// - Groups left with zero matching services are dropped.
///
/// Group order and service order are preserved.
pub fn filter_groups(groups: &[ServiceGroup], query: &str) -> Vec<ServiceGroup> {
    if query.trim().is_empty() {
        return groups.to_vec();
    }

    let needle = query.to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let services: Vec<_> = group
                .services
                .iter()
                .filter(|s| s.matches(&needle))
                .cloned()
                .collect();
            (!services.is_empty()).then(|| ServiceGroup {
                services,
                ..group.clone()
            })
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
