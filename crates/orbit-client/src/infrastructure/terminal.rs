//! Plain-text rendering of a [`DashboardView`] for the terminal.

use orbit_core::{DashboardView, Service};

/// Renders `view` as the text printed by `orbit show`.
///
/// Collapsed groups list only their name and size.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut lines = vec![view.title.clone(), view.subtitle.clone()];

    if !view.quick_links.is_empty() {
        let links: Vec<String> = view
            .quick_links
            .iter()
            .map(|l| format!("{} <{}>", l.name, l.url))
            .collect();
        lines.push(String::new());
        lines.push(format!("Links: {}", links.join("  ")));
    }

    if !view.favorites.is_empty() {
        lines.push(String::new());
        lines.push("★ Favorites".to_string());
        lines.extend(view.favorites.iter().map(service_line));
    }

    for group in &view.groups {
        let label = match group.group.icon.as_deref() {
            Some(icon) if !icon.is_empty() => format!("{icon} {}", group.group.name),
            _ => group.group.name.clone(),
        };
        lines.push(String::new());
        if group.initially_expanded {
            lines.push(label);
            lines.extend(group.group.services.iter().map(service_line));
        } else {
            lines.push(format!(
                "{label} ({} services, collapsed)",
                group.group.services.len()
            ));
        }
    }

    if view.no_results {
        lines.push(String::new());
        lines.push("No services found".to_string());
    }

    lines.push(String::new());
    lines.push(view.footer.clone());
    lines.join("\n")
}

fn service_line(service: &Service) -> String {
    if service.description.is_empty() {
        format!("  {} {}  {}", service.icon, service.name, service.url)
    } else {
        format!(
            "  {} {} - {}  {}",
            service.icon, service.name, service.description, service.url
        )
    }
}
