//! Contributor list aggregation

use std::collections::BTreeSet;

use relnote_core::Result;
use relnote_tracker::Issue;
use serde::Serialize;
use tracing::debug;

use crate::formatter::DEFAULT_WEB_URL;

/// Distinct pull request authors, sorted by login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Contributors {
    logins: BTreeSet<String>,
}

impl Contributors {
    /// Collect the authors of `issues`
    pub fn from_issues(issues: &[Issue]) -> Self {
        let logins: BTreeSet<String> = issues.iter().map(|i| i.author_login.clone()).collect();
        debug!(
            issues = issues.len(),
            contributors = logins.len(),
            "contributors collected"
        );
        Self { logins }
    }

    /// Logins in ascending order
    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.logins.iter().map(String::as_str)
    }

    /// Number of distinct contributors
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Check if nobody contributed
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Render one Markdown profile link per line
    pub fn to_markdown(&self, web_url: &str) -> String {
        let web_url = web_url.trim_end_matches('/');
        self.logins()
            .map(|login| format!("* [@{}]({}/{})\n", login, web_url, login))
            .collect()
    }

    /// Render the logins as a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render the contributor list of `issues` with default links
pub fn render_contributors(issues: &[Issue]) -> String {
    Contributors::from_issues(issues).to_markdown(DEFAULT_WEB_URL)
}
