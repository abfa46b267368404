//! Markdown changelog formatter

use chrono::NaiveDate;
use relnote_core::GroupConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{ClassifiedResult, ReleaseInfo};

/// Default web host for release and profile links
pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Web host used for the release tag link
    pub web_url: String,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            web_url: DEFAULT_WEB_URL.to_string(),
        }
    }

    /// Set the web host for links
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, classified, groups), fields(milestone = %release.milestone, group_count = groups.len()))]
    fn format(
        &self,
        release: &ReleaseInfo,
        classified: &ClassifiedResult,
        groups: &[GroupConfig],
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "## [{}]({}/{}/releases/tag/{}) - {}\n",
            release.milestone,
            self.web_url,
            release.repo,
            release.tag(),
            release.date.format("%Y-%m-%d")
        ));

        for group in groups {
            let issues = classified.issues_in(&group.name);
            if issues.is_empty() {
                continue;
            }

            output.push_str(&format!("* {}\n", group.name));
            for issue in issues {
                output.push_str(&format!("  * {} (#{})\n", issue.title, issue.number));
            }
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

/// Render a Markdown changelog with the default formatter
pub fn render_changelog(
    milestone: &str,
    repo: &str,
    classified: &ClassifiedResult,
    groups: &[GroupConfig],
    date: NaiveDate,
) -> String {
    let release = ReleaseInfo::new(milestone, repo, date);
    MarkdownFormatter::new().format(&release, classified, groups)
}
