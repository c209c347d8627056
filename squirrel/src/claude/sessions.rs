//! Session index lookup for a project.
//!
//! Claude keeps one directory per project under `~/.claude/projects/`,
//! named after the project path with every `/` replaced by `-`:
//! `/home/me/code/app` lives in `-home-me-code-app/`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SessionIndexError;
use crate::models::{SessionEnrichment, SessionIndex};

const SESSIONS_INDEX_FILE: &str = "sessions-index.json";

/// Directory name Claude uses for a project path.
pub fn project_dir_name(project_path: &str) -> String {
    project_path.replace('/', "-")
}

/// Directory holding a project's session index and logs.
pub fn project_dir(projects_dir: &Path, project_path: &str) -> PathBuf {
    projects_dir.join(project_dir_name(project_path))
}

/// Read a `sessions-index.json` file.
pub fn parse_sessions_index(path: &Path) -> Result<SessionIndex, SessionIndexError> {
    let content = std::fs::read_to_string(path).map_err(|source| SessionIndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SessionIndexError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a project's sessions and pick out the most recently modified one.
///
/// Returns `None` when the index is missing or unreadable; the project is
/// then simply left without session data.
pub fn session_enrichment(project_path: &str, projects_dir: &Path) -> Option<SessionEnrichment> {
    let index_path = project_dir(projects_dir, project_path).join(SESSIONS_INDEX_FILE);

    let index = match parse_sessions_index(&index_path) {
        Ok(index) => index,
        Err(e) => {
            debug!(project = project_path, error = %e, "no session index");
            return None;
        }
    };

    let mut enrichment = SessionEnrichment::default();
    let mut latest_modified = "";
    for session in &index.entries {
        // `modified` is fixed-width ISO-8601, so string order is time order
        if session.modified.as_str() > latest_modified {
            latest_modified = &session.modified;
            enrichment.latest_summary.clone_from(&session.summary);
            enrichment.latest_branch.clone_from(&session.git_branch);
        }
    }
    enrichment.sessions = index.entries;

    Some(enrichment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_index(projects_dir: &Path, project_path: &str, index: &serde_json::Value) {
        let dir = project_dir(projects_dir, project_path);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSIONS_INDEX_FILE), index.to_string()).unwrap();
    }

    #[test]
    fn dir_name_replaces_separators() {
        assert_eq!(
            project_dir_name("/Users/me/Versioncontrol/local/foo"),
            "-Users-me-Versioncontrol-local-foo"
        );
    }

    #[test]
    fn parse_index_reads_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSIONS_INDEX_FILE);
        std::fs::write(
            &path,
            json!({
                "version": 1,
                "entries": [{
                    "sessionId": "abc",
                    "firstPrompt": "hello",
                    "summary": "Set up project",
                    "messageCount": 12,
                    "created": "2026-02-20T10:00:00.000Z",
                    "modified": "2026-02-20T11:00:00.000Z",
                    "gitBranch": "main",
                    "projectPath": "/x/app",
                    "isSidechain": false
                }]
            })
            .to_string(),
        )
        .unwrap();

        let index = parse_sessions_index(&path).unwrap();
        assert_eq!(index.version, 1);
        assert_eq!(index.entries.len(), 1);
        assert_eq!(index.entries[0].session_id, "abc");
        assert_eq!(index.entries[0].message_count, 12);
    }

    #[test]
    fn parse_index_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSIONS_INDEX_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            parse_sessions_index(&path),
            Err(SessionIndexError::Parse { .. })
        ));
    }

    #[test]
    fn enrichment_picks_latest_modified() {
        let dir = tempdir().unwrap();
        write_index(
            dir.path(),
            "/x/app",
            &json!({
                "version": 1,
                "entries": [
                    {"sessionId": "a", "summary": "older", "modified": "2026-02-19T10:00:00.000Z", "gitBranch": "main"},
                    {"sessionId": "b", "summary": "newest", "modified": "2026-02-21T10:00:00.000Z", "gitBranch": "feature/x"},
                    {"sessionId": "c", "summary": "tie", "modified": "2026-02-21T10:00:00.000Z", "gitBranch": "tie-branch"}
                ]
            }),
        );

        let e = session_enrichment("/x/app", dir.path()).unwrap();
        assert_eq!(e.sessions.len(), 3);
        assert_eq!(e.latest_summary, "newest");
        assert_eq!(e.latest_branch, "feature/x");
    }

    #[test]
    fn enrichment_missing_index_is_none() {
        let dir = tempdir().unwrap();
        assert!(session_enrichment("/x/nothing", dir.path()).is_none());
    }

    #[test]
    fn enrichment_corrupt_index_is_none() {
        let dir = tempdir().unwrap();
        let project = project_dir(dir.path(), "/x/app");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join(SESSIONS_INDEX_FILE), "[]]").unwrap();
        assert!(session_enrichment("/x/app", dir.path()).is_none());
    }

    #[test]
    fn enrichment_tolerates_null_fields() {
        let dir = tempdir().unwrap();
        write_index(
            dir.path(),
            "/x/app",
            &json!({
                "version": 1,
                "entries": [{
                    "sessionId": "a",
                    "summary": null,
                    "firstPrompt": null,
                    "messageCount": null,
                    "modified": "2026-02-20T10:00:00.000Z",
                    "gitBranch": "feature/x",
                    "projectPath": null
                }]
            }),
        );

        let e = session_enrichment("/x/app", dir.path()).unwrap();
        assert_eq!(e.sessions.len(), 1);
        assert_eq!(e.sessions[0].summary, "");
        assert_eq!(e.sessions[0].message_count, 0);
        assert_eq!(e.latest_branch, "feature/x");
    }
}
