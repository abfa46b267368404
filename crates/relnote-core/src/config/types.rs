//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for relnote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository identifier (`owner/name`)
    pub repo: String,

    /// Changelog groups, in output order
    pub groups: Vec<GroupConfig>,
}

impl Config {
    /// Create a configuration from a repository and its groups
    pub fn new(repo: impl Into<String>, groups: Vec<GroupConfig>) -> Self {
        Self {
            repo: repo.into(),
            groups,
        }
    }

    /// The group receiving issues that match no label.
    ///
    /// This is the group marked `default`, or the last declared group when
    /// none is marked. `None` only for a configuration without groups.
    pub fn default_group(&self) -> Option<&GroupConfig> {
        self.groups
            .iter()
            .find(|g| g.default)
            .or_else(|| self.groups.last())
    }
}

/// A named bucket of labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Group name, rendered as the section heading
    pub name: String,

    /// Labels routing an issue into this group
    #[serde(default)]
    pub labels: Vec<String>,

    /// Whether unmatched issues land here
    #[serde(default)]
    pub default: bool,
}

impl GroupConfig {
    /// Create a group with the given labels
    pub fn new<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            default: false,
        }
    }

    /// Mark this group as the default group
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_explicit() {
        let config = Config::new(
            "o/r",
            vec![
                GroupConfig::new("MISC", Vec::<String>::new()).as_default(),
                GroupConfig::new("BUGFIXES", ["kind/bug"]),
            ],
        );
        assert_eq!(config.default_group().unwrap().name, "MISC");
    }

    #[test]
    fn test_default_group_falls_back_to_last() {
        let config = Config::new(
            "o/r",
            vec![
                GroupConfig::new("FEATURE", ["kind/feature"]),
                GroupConfig::new("BUGFIXES", ["kind/bug"]),
            ],
        );
        assert_eq!(config.default_group().unwrap().name, "BUGFIXES");
    }

    #[test]
    fn test_default_group_none_without_groups() {
        let config = Config::new("o/r", Vec::new());
        assert!(config.default_group().is_none());
    }
}
