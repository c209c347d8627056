//! Deep mining of a project's session logs for markers and recent prompts.

use std::path::Path;

use tracing::debug;

use super::sessions::project_dir;
use super::tail::read_session_messages;
use super::{extract_markers, extract_text};
use crate::models::{DeepEnrichment, ProjectSummary, SessionMessage};

/// Lines kept from the end of each session log.
pub const DEEP_RETENTION: usize = 200;

/// Human messages previewed per session.
pub const PREVIEWS_PER_SESSION: usize = 5;

/// Human messages previewed per project.
pub const PREVIEWS_PER_PROJECT: usize = 10;

/// Most recent human messages with text, newest first.
fn recent_human_messages(messages: &[SessionMessage], max: usize) -> Vec<String> {
    messages
        .iter()
        .rev()
        .filter(|m| m.kind.is_human())
        .map(extract_text)
        .filter(|text| !text.is_empty())
        .take(max)
        .collect()
}

/// Mine every session of a project.
///
/// Sessions whose log cannot be read are skipped. Markers are deduplicated
/// per session only, so the same marker found in two sessions appears twice.
pub fn mine_project(project: &ProjectSummary, projects_dir: &Path) -> DeepEnrichment {
    let sessions_dir = project_dir(projects_dir, &project.path);
    let mut enrichment = DeepEnrichment::default();

    for session in &project.sessions {
        let log_path = sessions_dir.join(format!("{}.jsonl", session.session_id));
        let messages = match read_session_messages(&log_path, DEEP_RETENTION) {
            Ok(messages) => messages,
            Err(e) => {
                debug!(
                    project = %project.path,
                    session = %session.session_id,
                    error = %e,
                    "skipping unreadable session log"
                );
                continue;
            }
        };

        enrichment
            .todos
            .extend(extract_markers(&messages, &session.session_id));
        enrichment
            .last_messages
            .extend(recent_human_messages(&messages, PREVIEWS_PER_SESSION));
    }

    enrichment.last_messages.truncate(PREVIEWS_PER_PROJECT);
    enrichment
}
