//! Built-in configuration

use super::types::{Config, GroupConfig};

/// Embedded configuration used when no config file is given
pub const DEFAULT_CONFIG_YAML: &str = r#"repo: go-gitea/gitea
groups:
  -
    name: BREAKING
    labels:
      - kind/breaking
  -
    name: FEATURE
    labels:
      - kind/feature
  -
    name: BUGFIXES
    labels:
      - kind/bug
  -
    name: ENHANCEMENT
    labels:
      - kind/enhancement
      - kind/refactor
  -
    name: SECURITY
    labels:
      - kind/security
  -
    name: TESTING
    labels:
      - kind/testing
  -
    name: TRANSLATION
    labels:
      - kind/translation
  -
    name: BUILD
    labels:
      - kind/build
      - kind/lint
  -
    name: DOCS
    labels:
    - kind/docs
  -
    name: MISC
    default: true"#;

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "go-gitea/gitea",
            vec![
                GroupConfig::new("BREAKING", ["kind/breaking"]),
                GroupConfig::new("FEATURE", ["kind/feature"]),
                GroupConfig::new("BUGFIXES", ["kind/bug"]),
                GroupConfig::new("ENHANCEMENT", ["kind/enhancement", "kind/refactor"]),
                GroupConfig::new("SECURITY", ["kind/security"]),
                GroupConfig::new("TESTING", ["kind/testing"]),
                GroupConfig::new("TRANSLATION", ["kind/translation"]),
                GroupConfig::new("BUILD", ["kind/build", "kind/lint"]),
                GroupConfig::new("DOCS", ["kind/docs"]),
                GroupConfig::new("MISC", Vec::<String>::new()).as_default(),
            ],
        )
    }
}
