//! Search query construction

use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-text search query understood by the tracker
///
/// Milestone matching is left entirely to the tracker: the milestone is
/// quoted verbatim and never normalized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Merged pull requests of `repo` whose milestone is exactly `milestone`
    pub fn merged_in_milestone(repo: &str, milestone: &str) -> Self {
        Self {
            text: format!(r#"repo:{} is:merged milestone:"{}""#, repo, milestone),
        }
    }

    /// Use a raw query string as-is
    pub fn raw(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Query text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
