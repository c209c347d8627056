//! Acknowledgement store.
//!
//! Projects the user has looked at and decided to leave alone, optionally
//! only for a while. Stored as JSON:
//!
//! ```json
//! {"acknowledged": [{"path": "/x/app", "ackedAt": "...", "expiresAt": null}]}
//! ```

use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::Acknowledgements;
use crate::error::{ConfigError, DurationError};

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([dwm])$").expect("duration pattern is valid"));

/// A single acknowledged project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckEntry {
    pub path: String,
    pub acked_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AckEntry {
    /// Whether the acknowledgement still holds at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires| expires > now)
    }
}

/// Top-level squirrel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub acknowledged: Vec<AckEntry>,
}

impl Config {
    /// Read the config, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether `path` is acknowledged and not expired at `now`.
    pub fn is_acknowledged_at(&self, path: &str, now: DateTime<Utc>) -> bool {
        self.acknowledged
            .iter()
            .find(|e| e.path == path)
            .is_some_and(|e| e.is_active_at(now))
    }

    /// Add or refresh an acknowledgement.
    pub fn ack(&mut self, path: &str, expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if let Some(entry) = self.acknowledged.iter_mut().find(|e| e.path == path) {
            entry.acked_at = now;
            entry.expires_at = expires_at;
            return;
        }

        self.acknowledged.push(AckEntry {
            path: path.to_string(),
            acked_at: now,
            expires_at,
        });
    }

    /// Remove an acknowledgement. Returns `true` if one existed.
    pub fn unack(&mut self, path: &str) -> bool {
        let before = self.acknowledged.len();
        self.acknowledged.retain(|e| e.path != path);
        self.acknowledged.len() != before
    }
}

/// The acknowledgement store as seen at a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct AckedAt<'a> {
    config: &'a Config,
    now: DateTime<Utc>,
}

impl Config {
    /// View for categorization, evaluating expiry against `now`.
    pub const fn at(&self, now: DateTime<Utc>) -> AckedAt<'_> {
        AckedAt { config: self, now }
    }
}

impl Acknowledgements for AckedAt<'_> {
    fn is_acknowledged(&self, path: &str) -> bool {
        self.config.is_acknowledged_at(path, self.now)
    }
}

/// Parse a human-friendly duration: `7d`, `2w` or `3m` (30-day months).
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let caps = DURATION
        .captures(s)
        .ok_or_else(|| DurationError::Invalid(s.to_string()))?;

    let n: i64 = caps[1]
        .parse()
        .map_err(|_| DurationError::Invalid(s.to_string()))?;
    if n <= 0 {
        return Err(DurationError::NotPositive(s.to_string()));
    }

    let days_per_unit = match &caps[2] {
        "w" => 7,
        "m" => 30,
        _ => 1,
    };

    n.checked_mul(days_per_unit)
        .and_then(Duration::try_days)
        .ok_or_else(|| DurationError::Invalid(s.to_string()))
}
