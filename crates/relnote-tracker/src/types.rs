//! Issue tracker types

use serde::{Deserialize, Serialize};

/// A merged pull request returned by the tracker search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker-wide identifier
    pub id: u64,
    /// Repository-local number (rendered as `#number`)
    pub number: u64,
    /// Title
    pub title: String,
    /// Login of the author
    pub author_login: String,
    /// Label names in the order the tracker returned them
    pub labels: Vec<String>,
}

impl Issue {
    /// Create a new issue without labels
    pub fn new(
        id: u64,
        number: u64,
        title: impl Into<String>,
        author_login: impl Into<String>,
    ) -> Self {
        Self {
            id,
            number,
            title: title.into(),
            author_login: author_login.into(),
            labels: Vec::new(),
        }
    }

    /// Set the labels, keeping their order
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the issue carries no labels
    pub fn is_unlabeled(&self) -> bool {
        self.labels.is_empty()
    }
}
