//! JSON changelog formatter

use relnote_core::GroupConfig;
use serde_json::{json, Value};

use super::ChangelogFormatter;
use crate::types::{ClassifiedResult, ReleaseInfo};

/// JSON changelog formatter, for scripting
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for JsonFormatter {
    fn format(
        &self,
        release: &ReleaseInfo,
        classified: &ClassifiedResult,
        groups: &[GroupConfig],
    ) -> String {
        let sections: Vec<Value> = groups
            .iter()
            .filter_map(|group| {
                let issues = classified.issues_in(&group.name);
                if issues.is_empty() {
                    return None;
                }
                let entries: Vec<Value> = issues
                    .iter()
                    .map(|issue| {
                        json!({
                            "number": issue.number,
                            "title": issue.title,
                            "author": issue.author_login,
                            "labels": issue.labels,
                        })
                    })
                    .collect();
                Some(json!({ "name": group.name, "issues": entries }))
            })
            .collect();

        let document = json!({
            "milestone": release.milestone,
            "repo": release.repo,
            "tag": release.tag(),
            "date": release.date.format("%Y-%m-%d").to_string(),
            "groups": sections,
        });

        format!("{:#}", document)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
