//! Changelog types

use std::collections::HashMap;

use chrono::NaiveDate;
use relnote_tracker::Issue;
use serde::Serialize;

/// Issues assigned to one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupIssues {
    /// Group name
    pub name: String,
    /// Issues in fetch order
    pub issues: Vec<Issue>,
}

impl GroupIssues {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issues: Vec::new(),
        }
    }

    /// Check if no issue landed in this group
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issues grouped by changelog group.
///
/// Groups keep the order they were seeded in and issues keep the order they
/// were pushed in; the name index is only used for lookups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifiedResult {
    groups: Vec<GroupIssues>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl ClassifiedResult {
    /// Create a result seeded with empty groups, in the given order
    pub fn with_groups<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::default();
        for name in names {
            result.ensure_group(name.into());
        }
        result
    }

    fn ensure_group(&mut self, name: String) -> usize {
        if let Some(&position) = self.positions.get(&name) {
            return position;
        }
        let position = self.groups.len();
        self.positions.insert(name.clone(), position);
        self.groups.push(GroupIssues::new(name));
        position
    }

    /// Append an issue to a group, adding the group at the end if unknown
    pub fn push(&mut self, group: &str, issue: Issue) {
        let position = self.ensure_group(group.to_string());
        self.groups[position].issues.push(issue);
    }

    /// Issues assigned to `group`, empty if the group is unknown
    pub fn issues_in(&self, group: &str) -> &[Issue] {
        self.positions
            .get(group)
            .map(|&p| self.groups[p].issues.as_slice())
            .unwrap_or(&[])
    }

    /// All groups in order, including empty ones
    pub fn groups(&self) -> &[GroupIssues] {
        &self.groups
    }

    /// Total number of classified issues
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.issues.len()).sum()
    }

    /// Check if no issue was classified
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl PartialEq for ClassifiedResult {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl Eq for ClassifiedResult {}

/// Release the notes are written for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseInfo {
    /// Milestone name
    pub milestone: String,
    /// Repository identifier
    pub repo: String,
    /// Release date shown in the heading
    pub date: NaiveDate,
}

impl ReleaseInfo {
    /// Create release info
    pub fn new(milestone: impl Into<String>, repo: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            milestone: milestone.into(),
            repo: repo.into(),
            date,
        }
    }

    /// Tag the release is published under
    pub fn tag(&self) -> String {
        format!("v{}", self.milestone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64) -> Issue {
        Issue::new(number, number, format!("PR {}", number), "dev")
    }

    #[test]
    fn test_seeded_order_kept() {
        let mut result = ClassifiedResult::with_groups(["B", "A", "C"]);
        result.push("C", issue(1));
        result.push("B", issue(2));
        result.push("C", issue(3));

        let names: Vec<&str> = result.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        let numbers: Vec<u64> = result.issues_in("C").iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_unknown_group_appended() {
        let mut result = ClassifiedResult::with_groups(["A"]);
        result.push("Z", issue(9));

        assert_eq!(result.groups().len(), 2);
        assert_eq!(result.groups()[1].name, "Z");
        assert!(result.issues_in("missing").is_empty());
    }

    #[test]
    fn test_release_tag() {
        let date = NaiveDate::from_ymd_opt(2018, 7, 4).unwrap();
        assert_eq!(ReleaseInfo::new("1.5.0", "o/r", date).tag(), "v1.5.0");
    }
}
