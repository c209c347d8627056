//! Project summary model and the enrichment values merged into it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionRecord;

/// Where a marker was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// `TODO:`, `FIXME:` or `HACK:` note.
    #[serde(rename = "TODO")]
    Inline,
    /// Unchecked `- [ ]` list item.
    #[serde(rename = "checkbox")]
    Checkbox,
}

impl MarkerKind {
    /// Label used in output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "TODO",
            Self::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actionable marker mined from session messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerItem {
    /// Trimmed marker text.
    pub text: String,
    /// Pattern family that matched.
    pub source: MarkerKind,
    /// Session the marker was found in.
    pub session_id: String,
    /// Timestamp of the message that contained it.
    pub timestamp: String,
}

/// Everything known about one project.
///
/// Built by the history aggregator, then extended by value through the
/// `with_*` methods as later phases produce their results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub path: String,
    pub short_name: String,
    pub prompt_count: u64,
    pub first_activity: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub last_prompt: String,
    pub days_since_active: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<SessionRecord>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub latest_summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub latest_branch: String,

    // Populated by medium/deep analysis
    #[serde(default)]
    pub git_dirty: bool,
    #[serde(default)]
    pub git_branch: String,
    #[serde(default)]
    pub uncommitted_files: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub todos: Vec<MarkerItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub last_messages: Vec<String>,

    // Populated by the categorizer
    #[serde(default)]
    pub is_open_work: bool,
    #[serde(default)]
    pub score: f64,
}

impl ProjectSummary {
    /// Create a summary with no enrichment.
    pub fn new(path: impl Into<String>, last_activity: DateTime<Utc>) -> Self {
        let path = path.into();
        Self {
            short_name: short_name(&path),
            path,
            prompt_count: 1,
            first_activity: last_activity,
            last_activity,
            last_prompt: String::new(),
            days_since_active: 0,
            sessions: Vec::new(),
            latest_summary: String::new(),
            latest_branch: String::new(),
            git_dirty: false,
            git_branch: String::new(),
            uncommitted_files: 0,
            todos: Vec::new(),
            last_messages: Vec::new(),
            is_open_work: false,
            score: 0.0,
        }
    }

    /// Merge session index data.
    #[must_use]
    pub fn with_sessions(self, enrichment: SessionEnrichment) -> Self {
        Self {
            sessions: enrichment.sessions,
            latest_summary: enrichment.latest_summary,
            latest_branch: enrichment.latest_branch,
            ..self
        }
    }

    /// Merge live git state.
    #[must_use]
    pub fn with_git(self, enrichment: GitEnrichment) -> Self {
        Self {
            git_dirty: enrichment.dirty,
            git_branch: enrichment.branch,
            uncommitted_files: enrichment.uncommitted_files,
            ..self
        }
    }

    /// Append mined markers and message previews.
    #[must_use]
    pub fn with_deep(mut self, enrichment: DeepEnrichment) -> Self {
        self.todos.extend(enrichment.todos);
        self.last_messages.extend(enrichment.last_messages);
        self
    }

    /// Live git branch, falling back to the branch of the latest session.
    pub fn effective_branch(&self) -> &str {
        if self.git_branch.is_empty() {
            &self.latest_branch
        } else {
            &self.git_branch
        }
    }
}

/// Final path segment, or the whole path when it has none.
pub fn short_name(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// Result of reading a project's session index.
#[derive(Debug, Clone, Default)]
pub struct SessionEnrichment {
    pub sessions: Vec<SessionRecord>,
    pub latest_summary: String,
    pub latest_branch: String,
}

/// Live git state of a project directory.
#[derive(Debug, Clone, Default)]
pub struct GitEnrichment {
    pub dirty: bool,
    pub branch: String,
    pub uncommitted_files: u64,
}

/// Result of mining a project's session logs.
#[derive(Debug, Clone, Default)]
pub struct DeepEnrichment {
    pub todos: Vec<MarkerItem>,
    pub last_messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_last_segment() {
        assert_eq!(short_name("/x/myapp"), "myapp");
        assert_eq!(short_name("/x/myapp/"), "myapp");
        assert_eq!(short_name("myapp"), "myapp");
        assert_eq!(short_name("/"), "/");
    }

    #[test]
    fn effective_branch_prefers_live_branch() {
        let mut p = ProjectSummary::new("/x/app", Utc::now());
        p.latest_branch = "feature/old".to_string();
        assert_eq!(p.effective_branch(), "feature/old");

        p.git_branch = "main".to_string();
        assert_eq!(p.effective_branch(), "main");
    }

    #[test]
    fn with_deep_appends() {
        let p = ProjectSummary::new("/x/app", Utc::now()).with_deep(DeepEnrichment {
            todos: Vec::new(),
            last_messages: vec!["a".to_string()],
        });
        let p = p.with_deep(DeepEnrichment {
            todos: Vec::new(),
            last_messages: vec!["b".to_string()],
        });
        assert_eq!(p.last_messages, vec!["a", "b"]);
    }
}
