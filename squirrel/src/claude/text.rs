//! Plain-text extraction from session message payloads.

use crate::models::{MessagePayload, SessionMessage};

/// Plain text of a message, empty if the payload has no usable text.
///
/// Payload shapes are tried in order: bare text, an envelope with string
/// content, then an envelope whose `text` segments are joined by newlines.
pub fn extract_text(msg: &SessionMessage) -> String {
    let Some(raw) = msg.message.as_ref() else {
        return String::new();
    };

    match MessagePayload::resolve(raw) {
        Some(MessagePayload::Text(text) | MessagePayload::Envelope { content: text, .. }) => text,
        Some(MessagePayload::Segments { content, .. }) => content
            .into_iter()
            .filter(|segment| segment.kind == "text")
            .filter_map(|segment| segment.text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;
    use serde_json::{json, Value};

    fn msg(payload: Value) -> SessionMessage {
        SessionMessage::new(MessageKind::User, payload, "2026-02-20T10:00:00Z")
    }

    #[test]
    fn bare_string() {
        assert_eq!(extract_text(&msg(json!("hello world"))), "hello world");
    }

    #[test]
    fn user_envelope() {
        let m = msg(json!({"role": "user", "content": "fix the bug"}));
        assert_eq!(extract_text(&m), "fix the bug");
    }

    #[test]
    fn assistant_segments_join_text_only() {
        let m = msg(json!({
            "role": "assistant",
            "content": [
                {"type": "text", "text": "first"},
                {"type": "tool_use", "id": "toolu_1", "name": "Read", "input": {}},
                {"type": "thinking", "thinking": "hmm"},
                {"type": "text", "text": "second"}
            ]
        }));
        assert_eq!(extract_text(&m), "first\nsecond");
    }

    #[test]
    fn empty_envelope_content_yields_empty() {
        assert_eq!(extract_text(&msg(json!({"role": "user", "content": ""}))), "");
    }

    #[test]
    fn missing_or_unknown_payload_yields_empty() {
        assert_eq!(extract_text(&SessionMessage::default()), "");
        assert_eq!(extract_text(&msg(json!(42))), "");
        assert_eq!(extract_text(&msg(json!({"role": "user", "content": 7}))), "");
    }
}
