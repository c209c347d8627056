//! Interaction record model for lines of the Claude history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// A single prompt logged in `~/.claude/history.jsonl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Prompt text as it was displayed.
    #[serde(default, deserialize_with = "or_default")]
    pub display: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Absolute path of the project the prompt was issued in.
    pub project: String,
}

impl InteractionRecord {
    /// Create a record.
    #[cfg(test)]
    pub fn new(display: impl Into<String>, timestamp: i64, project: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            timestamp,
            project: project.into(),
        }
    }

    /// Timestamp as a UTC datetime, `None` when out of chrono's range.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
