//! Priority scoring.

use crate::models::ProjectSummary;

/// Branches that do not count as open work.
const DEFAULT_BRANCHES: &[&str] = &["main", "master", "develop", "dev"];

/// Days for the recency bonus to halve.
const RECENCY_HALF_LIFE_DAYS: f64 = 3.0;
const RECENCY_WEIGHT: f64 = 50.0;
const PROMPT_WEIGHT: f64 = 5.0;
const DIRTY_BONUS: f64 = 30.0;
const FEATURE_BRANCH_BONUS: f64 = 20.0;

/// Whether a branch is one of the long-lived default branches.
pub fn is_default_branch(branch: &str) -> bool {
    DEFAULT_BRANCHES.contains(&branch)
}

/// Whether a branch name is a non-empty, non-default branch.
pub fn is_feature_branch(branch: &str) -> bool {
    !branch.is_empty() && !is_default_branch(branch)
}

/// Uncommitted changes or a feature branch checked out.
pub fn is_open_work(project: &ProjectSummary) -> bool {
    project.git_dirty || is_feature_branch(project.effective_branch())
}

/// Priority score, higher means more in need of attention.
#[allow(clippy::cast_precision_loss)]
pub fn score(project: &ProjectSummary) -> f64 {
    let days = project.days_since_active as f64;
    let mut score = RECENCY_WEIGHT * (-days / RECENCY_HALF_LIFE_DAYS).exp2();

    if project.prompt_count > 0 {
        score += PROMPT_WEIGHT * (project.prompt_count as f64).log2();
    }

    if project.git_dirty {
        score += DIRTY_BONUS;
    }

    if is_feature_branch(project.effective_branch()) {
        score += FEATURE_BRANCH_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(days: i64, prompts: u64) -> ProjectSummary {
        let mut p = ProjectSummary::new("/x/app", Utc::now());
        p.days_since_active = days;
        p.prompt_count = prompts;
        p
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fresh_single_prompt_scores_full_recency() {
        assert!(approx(score(&project(0, 1)), 50.0));
    }

    #[test]
    fn recency_halves_every_three_days() {
        assert!(approx(score(&project(3, 1)), 25.0));
        assert!(approx(score(&project(6, 1)), 12.5));
    }

    #[test]
    fn prompt_volume_is_logarithmic() {
        assert!(approx(score(&project(0, 8)), 50.0 + 15.0));
    }

    #[test]
    fn dirty_scores_higher() {
        let clean = project(2, 4);
        let mut dirty = clean.clone();
        dirty.git_dirty = true;
        assert!(score(&dirty) > score(&clean));
        assert!(approx(score(&dirty) - score(&clean), 30.0));
    }

    #[test]
    fn feature_branch_from_session_counts() {
        let mut p = project(0, 1);
        p.latest_branch = "feature/login".to_string();
        assert!(approx(score(&p), 70.0));
        assert!(is_open_work(&p));

        // live branch overrides the session branch
        p.git_branch = "main".to_string();
        assert!(approx(score(&p), 50.0));
        assert!(!is_open_work(&p));
    }

    #[test]
    fn default_branches_are_case_sensitive() {
        for b in DEFAULT_BRANCHES {
            assert!(is_default_branch(b));
            assert!(!is_feature_branch(b));
        }
        assert!(!is_default_branch("Main"));
        assert!(!is_feature_branch(""));
        assert!(is_feature_branch("Main"));
        assert!(is_feature_branch("fix/typo"));
    }
}
