//! TODO/FIXME/HACK and checkbox mining.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::extract_text;
use crate::models::{MarkerItem, MarkerKind, SessionMessage};

static INLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:TODO|FIXME|HACK):\s*(.+)").expect("inline marker pattern is valid")
});

static OPEN_CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- \[ \]\s+(.+)").expect("checkbox pattern is valid"));

/// Trimmed captures of `pattern` in `text`, skipping blank ones.
fn captures<'t>(pattern: &'t Regex, text: &'t str) -> impl Iterator<Item = &'t str> {
    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        // drop blank markers such as a bare `TODO:`
        .filter(|s| !s.is_empty())
}

/// Find markers across a batch of messages from one session.
///
/// Within the batch, a marker text is reported once: the first occurrence
/// wins regardless of which pattern found it.
pub fn extract_markers(messages: &[SessionMessage], session_id: &str) -> Vec<MarkerItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut markers = Vec::new();

    for msg in messages {
        let text = extract_text(msg);
        if text.is_empty() {
            continue;
        }

        let found = captures(&INLINE_MARKER, &text)
            .map(|t| (t, MarkerKind::Inline))
            .chain(captures(&OPEN_CHECKBOX, &text).map(|t| (t, MarkerKind::Checkbox)));

        for (item, source) in found {
            if seen.insert(item.to_string()) {
                markers.push(MarkerItem {
                    text: item.to_string(),
                    source,
                    session_id: session_id.to_string(),
                    timestamp: msg.timestamp.clone(),
                });
            }
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;
    use serde_json::json;

    fn text_msg(text: &str) -> SessionMessage {
        SessionMessage::new(MessageKind::Assistant, json!(text), "2026-02-20T10:00:00Z")
    }

    #[test]
    fn finds_inline_markers_case_insensitively() {
        let msgs = vec![text_msg(
            "Some context\nTODO: add error handling\nfixme:  flaky test  \nHack: skip auth",
        )];
        let markers = extract_markers(&msgs, "s1");
        let texts: Vec<&str> = markers.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["add error handling", "flaky test", "skip auth"]);
        assert!(markers.iter().all(|m| m.source == MarkerKind::Inline));
        assert_eq!(markers[0].session_id, "s1");
        assert_eq!(markers[0].timestamp, "2026-02-20T10:00:00Z");
    }

    #[test]
    fn finds_unchecked_boxes_only() {
        let msgs = vec![text_msg("- [x] done already\n- [ ] write docs\n- [ ] ship it")];
        let markers = extract_markers(&msgs, "s1");
        let texts: Vec<&str> = markers.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["write docs", "ship it"]);
        assert!(markers.iter().all(|m| m.source == MarkerKind::Checkbox));
    }

    #[test]
    fn deduplicates_within_batch() {
        let msgs = vec![
            text_msg("TODO: fix this"),
            text_msg("TODO: fix this"),
            text_msg("- [ ] write tests"),
        ];
        let markers = extract_markers(&msgs, "s1");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].source, MarkerKind::Inline);
        assert_eq!(markers[1].source, MarkerKind::Checkbox);
    }

    #[test]
    fn dedup_is_case_sensitive_and_trimmed() {
        let msgs = vec![text_msg("TODO:   Fix this   \nTODO: fix this\nTODO: Fix this")];
        let texts: Vec<String> = extract_markers(&msgs, "s1")
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["Fix this", "fix this"]);
    }

    #[test]
    fn first_pattern_wins_on_shared_text() {
        let msgs = vec![text_msg("TODO: ship it\n- [ ] ship it")];
        let markers = extract_markers(&msgs, "s1");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].source, MarkerKind::Inline);
    }

    #[test]
    fn blank_markers_are_ignored() {
        let msgs = vec![text_msg("TODO:   ")];
        assert!(extract_markers(&msgs, "s1").is_empty());
    }
}
