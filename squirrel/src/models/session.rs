//! Session index models read from `sessions-index.json`.

use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// One entry of a project's session index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    /// Claude session identifier, also the stem of the session log file.
    #[serde(deserialize_with = "or_default")]
    pub session_id: String,
    /// Absolute path of the session log.
    #[serde(deserialize_with = "or_default", skip_serializing_if = "String::is_empty")]
    pub full_path: String,
    /// First prompt of the session.
    #[serde(deserialize_with = "or_default")]
    pub first_prompt: String,
    /// Summary written by Claude when the session was compacted or closed.
    #[serde(deserialize_with = "or_default")]
    pub summary: String,
    /// Number of messages in the session.
    #[serde(deserialize_with = "or_default")]
    pub message_count: u64,
    /// Creation time, fixed-width ISO-8601.
    #[serde(deserialize_with = "or_default")]
    pub created: String,
    /// Last modification time, fixed-width ISO-8601.
    #[serde(deserialize_with = "or_default")]
    pub modified: String,
    /// Branch checked out when the session ran.
    #[serde(deserialize_with = "or_default")]
    pub git_branch: String,
    /// Project the session belongs to.
    #[serde(deserialize_with = "or_default")]
    pub project_path: String,
    /// Whether the session is a sidechain (subagent) conversation.
    #[serde(deserialize_with = "or_default")]
    pub is_sidechain: bool,
}

/// Top-level structure of `sessions-index.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionIndex {
    /// Format version.
    #[serde(deserialize_with = "or_default")]
    pub version: u32,
    /// Sessions in file order.
    #[serde(deserialize_with = "or_default")]
    pub entries: Vec<SessionRecord>,
}
