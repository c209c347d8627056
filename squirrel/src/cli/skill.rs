//! The `/squirrel` skill for Claude Code.
//!
//! Installed as `<claude_dir>/skills/squirrel/SKILL.md` so a session can run
//! squirrel itself and summarize the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SKILL_CONTENT: &str = r#"---
name: squirrel
description: Find forgotten Claude Code projects - shows open work, activity timeline, and recommendations
user_invocable: true
---

# Squirrel - Find Your Forgotten Projects

Run the squirrel CLI to analyze Claude Code history and present results.

## Steps

1. Run the squirrel command with JSON output and deep analysis:

   ```bash
   squirrel status --json --deep --days 14
   ```

2. Parse the JSON output and present the results in a structured way:

   **For each category (openWork, recentActivity, sleeping):**
   - Show the project name, last activity date, prompt count
   - For open work: highlight uncommitted files and feature branches
   - For sleeping projects: show days since last activity

3. After presenting the overview, provide:
   - **Top 3 recommendations:** which projects the user should focus on (highest score)
   - **Quick summary:** "You have X open work items, Y active projects and Z sleeping projects"

4. Ask the user which project they want to continue with.

5. When the user picks a project:
   - Run `squirrel project <name> --json` for its sessions, markers and recent messages
   - Show the last session summary and the last few prompts
   - Offer to switch to the project directory

## Notes

- The --deep flag takes longer but provides richer context
- Use --days 30 for a broader view
- `squirrel ack <name> --for 2w` hides a project you decided to leave alone
"#;

/// Where the skill lives under a Claude data directory.
pub fn skill_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join("skills").join("squirrel").join("SKILL.md")
}

/// Write the skill file, replacing any previous version.
pub fn install_skill(claude_dir: &Path) -> Result<PathBuf> {
    let path = skill_path(claude_dir);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create skill directory {}", dir.display()))?;
    }
    std::fs::write(&path, SKILL_CONTENT)
        .with_context(|| format!("Failed to write skill file {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_skill_under_claude_dir() {
        let dir = tempdir().unwrap();
        let path = install_skill(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("skills/squirrel/SKILL.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\nname: squirrel\n"));
        assert!(content.contains("squirrel status --json --deep"));
    }

    #[test]
    fn reinstall_overwrites() {
        let dir = tempdir().unwrap();
        let path = skill_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "old").unwrap();

        install_skill(dir.path()).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn blocked_directory_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("skills"), "not a directory").unwrap();
        let err = install_skill(dir.path()).unwrap_err();
        assert!(err.to_string().contains("skill directory"));
    }
}
