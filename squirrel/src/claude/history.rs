//! History log parsing and per-project aggregation.
//!
//! `~/.claude/history.jsonl` holds one JSON object per prompt. The log is
//! read tolerantly: a line that does not decode is skipped, only a log that
//! cannot be opened or read fails the run.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::HistoryError;
use crate::models::{InteractionRecord, ProjectSummary};

/// Read every well-formed record from the history log.
pub fn parse_history(path: &Path) -> Result<Vec<InteractionRecord>, HistoryError> {
    let file = File::open(path).map_err(|source| HistoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    // Split on raw bytes so a line with invalid UTF-8 is skipped, not fatal
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(|source| HistoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match serde_json::from_slice::<InteractionRecord>(&line) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped malformed history lines");
    }

    Ok(records)
}

/// Running per-project state while folding over the log.
struct ProjectAcc<'a> {
    path: &'a str,
    count: u64,
    first_ts: i64,
    last_ts: i64,
    last_prompt: &'a str,
}

impl<'a> ProjectAcc<'a> {
    fn start(record: &'a InteractionRecord) -> Self {
        Self {
            path: &record.project,
            count: 1,
            first_ts: record.timestamp,
            last_ts: record.timestamp,
            last_prompt: &record.display,
        }
    }

    fn observe(&mut self, record: &'a InteractionRecord) {
        self.count += 1;
        // Strictly greater: on a tie the earlier line keeps its prompt
        if record.timestamp > self.last_ts {
            self.last_ts = record.timestamp;
            self.last_prompt = &record.display;
        }
        if record.timestamp < self.first_ts {
            self.first_ts = record.timestamp;
        }
    }

    fn finish(self, now: DateTime<Utc>) -> Option<ProjectSummary> {
        let first = DateTime::from_timestamp_millis(self.first_ts)?;
        let last = DateTime::from_timestamp_millis(self.last_ts)?;

        let mut summary = ProjectSummary::new(self.path, last);
        summary.prompt_count = self.count;
        summary.first_activity = first;
        summary.last_prompt = self.last_prompt.to_string();
        summary.days_since_active = days_between(last, now);
        Some(summary)
    }
}

/// Whole days from `then` to `now`, zero if `then` is in the future.
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((now - then).num_hours() / 24).max(0)
}

/// Group records by project, keeping only those inside the lookback window.
///
/// Projects are returned in the order they first appear in `records`.
pub fn aggregate_by_project(
    records: &[InteractionRecord],
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<ProjectSummary> {
    let cutoff = now
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accs: Vec<ProjectAcc<'_>> = Vec::new();

    for record in records {
        let Some(at) = record.occurred_at() else {
            continue;
        };
        if at < cutoff {
            continue;
        }

        if let Some(&i) = index.get(record.project.as_str()) {
            accs[i].observe(record);
        } else {
            index.insert(&record.project, accs.len());
            accs.push(ProjectAcc::start(record));
        }
    }

    accs.into_iter().filter_map(|acc| acc.finish(now)).collect()
}

/// Records of one project, newest first, at most `max` of them (0 = all).
pub fn prompts_for_project(
    records: &[InteractionRecord],
    path: &str,
    max: usize,
) -> Vec<InteractionRecord> {
    let mut filtered: Vec<InteractionRecord> = records
        .iter()
        .filter(|r| r.project == path)
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if max > 0 {
        filtered.truncate(max);
    }
    filtered
}
