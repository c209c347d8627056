//! JSON output for scripting and the Claude Code skill.

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{categorize, Buckets};
    use crate::models::ProjectSummary;
    use chrono::Utc;
    use std::collections::HashSet;

    #[test]
    fn buckets_use_camel_case_keys() {
        let mut p = ProjectSummary::new("/x/app", Utc::now());
        p.git_dirty = true;
        let buckets = categorize(vec![p], &HashSet::<String>::new());

        let out = render_json(&buckets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["openWork"][0]["shortName"], "app");
        assert_eq!(value["openWork"][0]["promptCount"], 1);
        assert_eq!(value["openWork"][0]["gitDirty"], true);
        assert!(value["recentActivity"].as_array().unwrap().is_empty());
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn empty_enrichment_is_omitted() {
        let p = ProjectSummary::new("/x/app", Utc::now());
        let value: serde_json::Value = serde_json::from_str(&render_json(&p).unwrap()).unwrap();
        assert!(value.get("todos").is_none());
        assert!(value.get("latestSummary").is_none());
        assert!(value.get("score").is_some());
    }

    #[test]
    fn empty_buckets_serialize() {
        let out = render_json(&Buckets::default()).unwrap();
        assert!(out.contains("\"acknowledged\": []"));
    }
}
