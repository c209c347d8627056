//! Analysis pipeline: history → sessions → git → deep mining.
//!
//! Each phase runs over the whole project list before the next starts. A
//! phase computes an enrichment value per project and merges it into the
//! summary, so later phases see the results of earlier ones.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info};

use crate::claude::{aggregate_by_project, mine_project, parse_history, session_enrichment};
use crate::git::{RepoStatus, StatusSource};
use crate::models::{GitEnrichment, InteractionRecord, ProjectSummary};

const HISTORY_FILE: &str = "history.jsonl";
const PROJECTS_DIR: &str = "projects";

/// How much work to spend per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// History and session index only.
    Quick,
    /// Adds git status of each project directory.
    Medium,
    /// Adds mining of session logs for markers and recent prompts.
    Deep,
}

impl Depth {
    pub const fn includes_git(self) -> bool {
        matches!(self, Self::Medium | Self::Deep)
    }

    pub const fn includes_deep(self) -> bool {
        matches!(self, Self::Deep)
    }
}

impl From<RepoStatus> for GitEnrichment {
    fn from(status: RepoStatus) -> Self {
        Self {
            dirty: status.is_dirty,
            branch: status.branch,
            uncommitted_files: status.uncommitted_files,
        }
    }
}

/// One analysis run over a Claude data directory.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Root of Claude's data, usually `~/.claude`.
    pub claude_dir: PathBuf,
    /// Lookback window in days.
    pub window_days: u32,
    pub depth: Depth,
    /// Reference time for the window and day counts.
    pub now: DateTime<Utc>,
}

impl Pipeline {
    pub fn new(claude_dir: impl Into<PathBuf>, window_days: u32, depth: Depth) -> Self {
        Self {
            claude_dir: claude_dir.into(),
            window_days,
            depth,
            now: Utc::now(),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.claude_dir.join(HISTORY_FILE)
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.claude_dir.join(PROJECTS_DIR)
    }

    /// Read the interaction log; the only fatal step of a run.
    pub fn load_history(&self) -> Result<Vec<InteractionRecord>> {
        let records = parse_history(&self.history_path()).context("reading history")?;
        debug!(records = records.len(), "loaded history");
        Ok(records)
    }

    /// Load the history and run every phase enabled by `depth`.
    pub fn run(&self, git: &impl StatusSource) -> Result<Vec<ProjectSummary>> {
        let records = self.load_history()?;
        Ok(self.analyze(&records, git))
    }

    /// Run every phase over already loaded records.
    pub fn analyze(&self, records: &[InteractionRecord], git: &impl StatusSource) -> Vec<ProjectSummary> {
        let projects = aggregate_by_project(records, self.window_days, self.now);
        info!(
            projects = projects.len(),
            window_days = self.window_days,
            depth = ?self.depth,
            "aggregated history"
        );

        let projects_dir = self.projects_dir();
        let mut projects: Vec<ProjectSummary> = projects
            .into_iter()
            .map(|p| apply_sessions(p, &projects_dir))
            .collect();

        if self.depth.includes_git() {
            projects = projects.into_iter().map(|p| apply_git(p, git)).collect();
        }

        if self.depth.includes_deep() {
            projects = projects
                .into_iter()
                .map(|p| {
                    let mined = mine_project(&p, &projects_dir);
                    p.with_deep(mined)
                })
                .collect();
        }

        projects
    }
}

fn apply_sessions(project: ProjectSummary, projects_dir: &Path) -> ProjectSummary {
    match session_enrichment(&project.path, projects_dir) {
        Some(enrichment) => project.with_sessions(enrichment),
        None => project,
    }
}

fn apply_git(project: ProjectSummary, git: &impl StatusSource) -> ProjectSummary {
    match git.status(Path::new(&project.path)) {
        Ok(status) if status.is_repo => project.with_git(status.into()),
        Ok(_) => project,
        Err(e) => {
            debug!(project = %project.path, error = %e, "skipping git status");
            project
        }
    }
}
