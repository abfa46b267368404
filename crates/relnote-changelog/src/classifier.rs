//! Issue classification

use relnote_tracker::Issue;
use tracing::{debug, instrument, trace};

use crate::index::LabelIndex;
use crate::types::ClassifiedResult;

/// Assign every issue to exactly one group.
///
/// An issue's labels are scanned in the order the tracker returned them and
/// the first indexed label decides the group. Issues with no indexed label,
/// including unlabeled ones, go to `default_group`. Every indexed group is
/// present in the result, in declaration order, even when empty.
#[instrument(skip(issues, index), fields(issue_count = issues.len()))]
pub fn classify(issues: &[Issue], index: &LabelIndex, default_group: &str) -> ClassifiedResult {
    let mut result = ClassifiedResult::with_groups(index.group_names().iter().cloned());
    let mut defaulted = 0usize;

    for issue in issues {
        let group = issue
            .labels
            .iter()
            .find_map(|label| index.group_for(label))
            .unwrap_or_else(|| {
                defaulted += 1;
                default_group
            });

        trace!(number = issue.number, group, "classified issue");
        result.push(group, issue.clone());
    }

    debug!(
        classified = result.total(),
        defaulted, "issues classified"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnote_core::GroupConfig;

    fn issue(number: u64, labels: &[&str]) -> Issue {
        Issue::new(number, number, format!("PR {}", number), "dev")
            .with_labels(labels.iter().copied())
    }

    fn numbers(result: &ClassifiedResult, group: &str) -> Vec<u64> {
        result.issues_in(group).iter().map(|i| i.number).collect()
    }

    fn enhancement_then_bugfixes() -> LabelIndex {
        LabelIndex::build(&[
            GroupConfig::new("ENHANCEMENT", ["kind/refactor", "kind/enhancement"]),
            GroupConfig::new("BUGFIXES", ["kind/bug"]),
        ])
    }

    #[test]
    fn test_issue_label_order_decides() {
        let index = enhancement_then_bugfixes();

        let result = classify(&[issue(1, &["kind/refactor", "kind/bug"])], &index, "BUGFIXES");
        assert_eq!(numbers(&result, "ENHANCEMENT"), vec![1]);
        assert!(result.issues_in("BUGFIXES").is_empty());

        let result = classify(&[issue(1, &["kind/bug", "kind/refactor"])], &index, "BUGFIXES");
        assert_eq!(numbers(&result, "BUGFIXES"), vec![1]);
        assert!(result.issues_in("ENHANCEMENT").is_empty());
    }

    #[test]
    fn test_unmatched_goes_to_last_group_when_none_marked() {
        let groups = vec![
            GroupConfig::new("FEATURE", ["kind/feature"]),
            GroupConfig::new("BUGFIXES", ["kind/bug"]),
        ];
        let config = relnote_core::Config::new("o/r", groups);
        let default_group = &config.default_group().unwrap().name;
        let index = LabelIndex::build(&config.groups);

        let result = classify(&[issue(7, &["kind/unknown"])], &index, default_group);
        assert_eq!(numbers(&result, "BUGFIXES"), vec![7]);
    }

    #[test]
    fn test_unlabeled_goes_to_default() {
        let index = enhancement_then_bugfixes();
        let result = classify(&[issue(3, &[])], &index, "ENHANCEMENT");
        assert_eq!(numbers(&result, "ENHANCEMENT"), vec![3]);
    }

    #[test]
    fn test_each_issue_in_exactly_one_group() {
        let index = enhancement_then_bugfixes();
        let issues = vec![
            issue(1, &["kind/bug"]),
            issue(2, &["kind/enhancement", "kind/bug"]),
            issue(3, &["misc"]),
            issue(4, &["kind/bug", "kind/bug"]),
        ];

        let result = classify(&issues, &index, "BUGFIXES");
        assert_eq!(result.total(), issues.len());
        assert_eq!(numbers(&result, "BUGFIXES"), vec![1, 3, 4]);
        assert_eq!(numbers(&result, "ENHANCEMENT"), vec![2]);
    }

    #[test]
    fn test_input_untouched() {
        let index = enhancement_then_bugfixes();
        let issues = vec![issue(1, &["kind/bug"]), issue(2, &[])];
        let before = issues.clone();

        classify(&issues, &index, "BUGFIXES");
        assert_eq!(issues, before);
    }
}
