//! Changelog generation

use chrono::NaiveDate;
use relnote_core::config::validate_config;
use relnote_core::{Config, ConfigError, Milestone, Result};
use relnote_tracker::{fetch_all, Issue, IssueSearch};
use tracing::{debug, info, instrument};

use crate::classifier::classify;
use crate::contributors::Contributors;
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::index::LabelIndex;
use crate::types::{ClassifiedResult, ReleaseInfo};

/// Changelog generator
///
/// Owns the configuration and the label index built from it; the index is
/// built once and reused for every classification.
pub struct ChangelogGenerator {
    config: Config,
    index: LabelIndex,
    default_group: String,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new(config: Config) -> Result<Self> {
        validate_config(&config)?;
        let default_group = config
            .default_group()
            .map(|g| g.name.clone())
            .ok_or(ConfigError::NoGroups)?;
        let index = LabelIndex::build(&config.groups);
        debug!(default_group = %default_group, "changelog generator ready");

        Ok(Self {
            config,
            index,
            default_group,
            formatter: Box::new(MarkdownFormatter::new()),
        })
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Name of the group receiving unmatched issues
    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    /// Sort issues into the configured groups
    pub fn classify(&self, issues: &[Issue]) -> ClassifiedResult {
        classify(issues, &self.index, &self.default_group)
    }

    /// Classify and format issues for a milestone
    #[instrument(skip(self, issues), fields(milestone = %milestone, issue_count = issues.len()))]
    pub fn generate(&self, milestone: &Milestone, issues: &[Issue], date: NaiveDate) -> String {
        let classified = self.classify(issues);
        let release = ReleaseInfo::new(milestone.as_str(), &self.config.repo, date);
        let output = self
            .formatter
            .format(&release, &classified, &self.config.groups);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }

    /// Fetch the milestone's merged pull requests and format the changelog.
    ///
    /// A missing milestone fails before any request is made.
    pub async fn fetch_and_generate<S>(
        &self,
        search: &S,
        milestone: Option<&str>,
        date: NaiveDate,
    ) -> Result<String>
    where
        S: IssueSearch + ?Sized,
    {
        let milestone = Milestone::parse(milestone)?;
        info!(milestone = %milestone, repo = %self.config.repo, "generating changelog");

        let issues = fetch_all(search, &self.config.repo, milestone.as_str()).await?;
        Ok(self.generate(&milestone, &issues, date))
    }

    /// Fetch the milestone's merged pull requests and collect their authors
    pub async fn fetch_contributors<S>(
        &self,
        search: &S,
        milestone: Option<&str>,
    ) -> Result<Contributors>
    where
        S: IssueSearch + ?Sized,
    {
        let milestone = Milestone::parse(milestone)?;
        info!(milestone = %milestone, repo = %self.config.repo, "collecting contributors");

        let issues = fetch_all(search, &self.config.repo, milestone.as_str()).await?;
        Ok(Contributors::from_issues(&issues))
    }
}
