//! The complete derived dashboard for one document and one search query.

use crate::domain::model::{QuickLink, Service, ServiceGroup, ServicesConfig};
use crate::views::{favorites::resolve_favorites, filter::filter_groups};

/// Groups at these leading positions start expanded regardless of size.
const LEADING_EXPANDED_GROUPS: usize = 2;

/// Groups with at most this many services always start expanded.
const COMPACT_GROUP_SIZE: usize = 4;

/// One group as it should be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    /// The group with only its matching services.
    pub group: ServiceGroup,
    /// Whether the group starts expanded.
    pub initially_expanded: bool,
}

/// Everything a front end needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    /// Logo URL; `None` means "draw the built-in mark".
    pub logo: Option<String>,
    pub quick_links: Vec<QuickLink>,
    /// Resolved favorites.  Empty while a search is active.
    pub favorites: Vec<Service>,
    pub groups: Vec<GroupView>,
    /// A search is active and nothing matched.
    pub no_results: bool,
}

impl DashboardView {
    /// Derives the view for `config` under the committed search `query`.
    ///
    /// Favorites are hidden while `query` is non-empty so that search results
    /// are not duplicated above the groups.
    pub fn build(config: &ServicesConfig, query: &str) -> Self {
        let searching = !query.is_empty();

        let favorites = if searching {
            Vec::new()
        } else {
            resolve_favorites(config).into_iter().cloned().collect()
        };

        let groups: Vec<GroupView> = filter_groups(&config.groups, query)
            .into_iter()
            .enumerate()
            .map(|(index, group)| GroupView {
                initially_expanded: index < LEADING_EXPANDED_GROUPS
                    || group.services.len() <= COMPACT_GROUP_SIZE,
                group,
            })
            .collect();

        Self {
            title: config.site.title.clone(),
            subtitle: config.site.subtitle.clone(),
            footer: config.site.footer.clone(),
            logo: config.site.logo_url().map(str::to_string),
            quick_links: config.quick_links.clone(),
            favorites,
            no_results: searching && groups.is_empty(),
            groups,
        }
    }

    /// Number of services across all displayed groups.
    pub fn service_count(&self) -> usize {
        self.groups.iter().map(|g| g.group.services.len()).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
