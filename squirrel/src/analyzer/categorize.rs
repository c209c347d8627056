//! Sorting projects into attention buckets.

use std::collections::HashSet;

use serde::Serialize;

use super::score::{is_open_work, score};
use crate::models::ProjectSummary;

/// Projects active within this many days count as recent.
pub const RECENT_DAYS: i64 = 3;

/// Answers whether a project has been acknowledged by the user.
///
/// Implementations must not fail: anything unknown is "not acknowledged".
pub trait Acknowledgements {
    fn is_acknowledged(&self, path: &str) -> bool;
}

impl Acknowledgements for HashSet<String> {
    fn is_acknowledged(&self, path: &str) -> bool {
        self.contains(path)
    }
}

/// Projects partitioned by what they need from the user.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buckets {
    pub open_work: Vec<ProjectSummary>,
    pub recent_activity: Vec<ProjectSummary>,
    pub sleeping: Vec<ProjectSummary>,
    pub acknowledged: Vec<ProjectSummary>,
}

impl Buckets {
    /// Total number of projects across all buckets.
    pub fn len(&self) -> usize {
        self.open_work.len() + self.recent_activity.len() + self.sleeping.len() + self.acknowledged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Descending by score; stable, so ties keep discovery order.
fn sort_by_score(projects: &mut [ProjectSummary]) {
    projects.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Score every project and place it in exactly one bucket.
pub fn categorize(projects: Vec<ProjectSummary>, acks: &impl Acknowledgements) -> Buckets {
    let mut buckets = Buckets::default();

    for mut p in projects {
        p.score = score(&p);
        p.is_open_work = is_open_work(&p);

        if acks.is_acknowledged(&p.path) {
            buckets.acknowledged.push(p);
        } else if p.is_open_work {
            buckets.open_work.push(p);
        } else if p.days_since_active <= RECENT_DAYS {
            buckets.recent_activity.push(p);
        } else {
            buckets.sleeping.push(p);
        }
    }

    sort_by_score(&mut buckets.open_work);
    sort_by_score(&mut buckets.recent_activity);
    sort_by_score(&mut buckets.sleeping);
    sort_by_score(&mut buckets.acknowledged);

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn paths(v: &[ProjectSummary]) -> Vec<String> {
        v.iter().map(|p| p.path.clone()).collect()
    }

    fn project(path: &str, days: i64) -> ProjectSummary {
        let mut p = ProjectSummary::new(path, Utc::now());
        p.days_since_active = days;
        p
    }

    #[test]
    fn places_each_project_in_priority_order() {
        let mut dirty = project("/x/dirty", 10);
        dirty.git_dirty = true;
        let mut feature = project("/x/feature", 1);
        feature.latest_branch = "feature/x".to_string();
        let mut acked_dirty = project("/x/acked", 0);
        acked_dirty.git_dirty = true;

        let projects = vec![
            dirty,
            feature,
            acked_dirty,
            project("/x/recent", 3),
            project("/x/sleepy", 4),
        ];
        let acks: HashSet<String> = ["/x/acked".to_string()].into_iter().collect();

        let b = categorize(projects, &acks);

        assert_eq!(paths(&b.acknowledged), vec!["/x/acked"]);
        assert_eq!(paths(&b.open_work), vec!["/x/feature", "/x/dirty"]);
        assert_eq!(paths(&b.recent_activity), vec!["/x/recent"]);
        assert_eq!(paths(&b.sleeping), vec!["/x/sleepy"]);
        assert!(b.open_work.iter().all(|p| p.is_open_work));
        assert!(b.open_work.iter().all(|p| p.score > 0.0));
    }

    #[test]
    fn buckets_partition_input() {
        let projects: Vec<ProjectSummary> = (0..20)
            .map(|i| {
                let mut p = project(&format!("/x/p{i}"), i);
                p.git_dirty = i % 5 == 0;
                p
            })
            .collect();
        let acks: HashSet<String> = ["/x/p7".to_string(), "/x/p10".to_string()].into_iter().collect();

        let b = categorize(projects, &acks);
        assert_eq!(b.len(), 20);

        let mut all: Vec<String> = [&b.open_work, &b.recent_activity, &b.sleeping, &b.acknowledged]
            .iter()
            .flat_map(|v| v.iter().map(|p| p.path.clone()))
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 20);
    }

    #[test]
    fn equal_scores_keep_discovery_order() {
        let projects = vec![project("/x/b", 5), project("/x/a", 5), project("/x/c", 5)];
        let b = categorize(projects, &HashSet::<String>::new());
        let paths: Vec<&str> = b.sleeping.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["/x/b", "/x/a", "/x/c"]);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        assert!(categorize(Vec::new(), &HashSet::<String>::new()).is_empty());
    }
}
