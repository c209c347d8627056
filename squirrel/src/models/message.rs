//! Session log message model.
//!
//! Each line of `<session-id>.jsonl` is one message. The `message` field is
//! polymorphic: older logs store bare text, user turns store an envelope with
//! string content, assistant turns store an envelope with typed segments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nullable::or_default;

/// Kind of a session log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Message typed by the user.
    User,
    /// Legacy spelling of a user message.
    Human,
    /// Message produced by the assistant.
    Assistant,
    /// System message.
    System,
    /// Session summary line.
    Summary,
    /// Anything else.
    #[default]
    #[serde(other)]
    Unknown,
}

impl MessageKind {
    /// Convert kind to its log spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Human => "human",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Summary => "summary",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the message was authored by a person.
    pub const fn is_human(self) -> bool {
        matches!(self, Self::User | Self::Human)
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line of a session log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionMessage {
    /// Line kind.
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: MessageKind,
    /// Raw payload, resolved on demand with [`MessagePayload::resolve`].
    pub message: Option<Value>,
    /// ISO-8601 timestamp as written by Claude.
    #[serde(deserialize_with = "or_default")]
    pub timestamp: String,
    /// Working directory when the message was logged.
    #[serde(deserialize_with = "or_default")]
    pub cwd: String,
    /// Branch checked out when the message was logged.
    #[serde(deserialize_with = "or_default")]
    pub git_branch: String,
}

impl SessionMessage {
    /// Create a message with a payload.
    #[cfg(test)]
    pub fn new(kind: MessageKind, message: Value, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message),
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }
}

/// A typed content segment of an assistant envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentSegment {
    /// Segment kind (`text`, `tool_use`, `thinking`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Text of `text` segments.
    #[serde(default)]
    pub text: Option<String>,
}

/// The shapes a message payload can take, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessagePayload {
    /// Bare text.
    Text(String),
    /// Role envelope with a single text body.
    Envelope {
        #[serde(default)]
        role: String,
        content: String,
    },
    /// Role envelope with an ordered list of segments.
    Segments {
        #[serde(default)]
        role: String,
        #[serde(default)]
        content: Vec<ContentSegment>,
    },
}

impl MessagePayload {
    /// Decode a raw payload, trying each shape in order.
    pub fn resolve(raw: &Value) -> Option<Self> {
        Self::deserialize(raw).ok()
    }
}
