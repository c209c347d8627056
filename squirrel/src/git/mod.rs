//! Git working tree status.
//!
//! Uses the `git` binary so `.gitignore`, `.git/info/exclude` and the global
//! ignore file are all respected.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Git status of a project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStatus {
    /// Whether the directory is inside a git work tree.
    pub is_repo: bool,
    /// Whether there are uncommitted or untracked files.
    pub is_dirty: bool,
    /// Checked out branch, empty if it could not be determined.
    pub branch: String,
    /// Number of entries reported by `git status --porcelain`.
    pub uncommitted_files: u64,
}

/// Anything that can report the git status of a directory.
pub trait StatusSource {
    /// Status of `dir`; a directory outside version control is not an error.
    fn status(&self, dir: &Path) -> Result<RepoStatus>;
}

/// Status source backed by the `git` command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl StatusSource for GitCli {
    fn status(&self, dir: &Path) -> Result<RepoStatus> {
        check_status(dir)
    }
}

/// Run `git -C <dir> <args>` and return stdout.
fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .context("Failed to run git")?;

    if !output.status.success() {
        bail!(
            "git {} failed in {}: {}",
            args.join(" "),
            dir.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn is_git_repo(dir: &Path) -> Result<bool> {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["rev-parse", "--git-dir"])
        .output()
        .context("Failed to run git")?
        .status;
    Ok(status.success())
}

/// Check the git status of a directory.
///
/// Returns `RepoStatus::default()` if the directory is not a repository.
/// Branch and dirtiness are best effort: a repository without commits has
/// no branch name, and a failing `git status` leaves the tree marked clean.
pub fn check_status(dir: &Path) -> Result<RepoStatus> {
    if !dir.is_dir() || !is_git_repo(dir)? {
        return Ok(RepoStatus::default());
    }

    let mut status = RepoStatus {
        is_repo: true,
        ..RepoStatus::default()
    };

    if let Ok(branch) = git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]) {
        status.branch = branch.trim().to_string();
    }

    if let Ok(porcelain) = git(dir, &["status", "--porcelain"]) {
        status.uncommitted_files = porcelain.lines().filter(|l| !l.is_empty()).count() as u64;
        status.is_dirty = status.uncommitted_files > 0;
    }

    Ok(status)
}
