//! Free-text project lookup.

use crate::models::ProjectSummary;

/// Find the best matching project for a query.
///
/// Priority order, each tier checked against every project before the next:
/// 1. Exact path
/// 2. Short name (case-insensitive)
/// 3. Path suffix, e.g. `local/squirrel` (case-insensitive)
/// 4. Substring of the path (case-insensitive)
pub fn find_project<'a>(projects: &'a [ProjectSummary], query: &str) -> Option<&'a ProjectSummary> {
    if let Some(p) = projects.iter().find(|p| p.path == query) {
        return Some(p);
    }

    let q = query.to_lowercase();
    if let Some(p) = projects.iter().find(|p| p.short_name.to_lowercase() == q) {
        return Some(p);
    }

    let suffix = format!("/{q}");
    if let Some(p) = projects
        .iter()
        .find(|p| p.path.to_lowercase().ends_with(&suffix))
    {
        return Some(p);
    }

    projects.iter().find(|p| p.path.to_lowercase().contains(&q))
}
