//! Error types for reading Claude data and the acknowledgement store.
//!
//! Only a missing or unreadable history log aborts an analysis run. The
//! other variants are either caught per project or surfaced to the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading the interaction log.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to open history log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read history log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure loading a project's `sessions-index.json`.
#[derive(Debug, Error)]
pub enum SessionIndexError {
    #[error("failed to read session index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session index {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure loading or saving the acknowledgement store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("creating config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Malformed human-supplied duration such as `7d`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {0:?} (use e.g. 7d, 2w, 3m)")]
    Invalid(String),

    #[error("duration must be positive: {0:?}")]
    NotPositive(String),
}
