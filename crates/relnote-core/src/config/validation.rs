//! Configuration validation

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::ConfigError;

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    debug!(groups = config.groups.len(), "validating configuration");
    validate_repo(config);
    validate_groups(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_repo(config: &Config) {
    // An empty repo is passed through; the tracker decides what it matches.
    if config.repo.trim().is_empty() {
        warn!("configuration has an empty repo, search results will not be scoped");
    }
}

fn validate_groups(config: &Config) -> Result<(), ConfigError> {
    if config.groups.is_empty() {
        return Err(ConfigError::NoGroups);
    }

    let mut names = HashSet::new();
    let mut explicit_default: Option<usize> = None;

    for (i, group) in config.groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            return Err(ConfigError::invalid(
                format!("groups[{}].name", i),
                "group name cannot be empty",
            ));
        }

        if !names.insert(group.name.as_str()) {
            return Err(ConfigError::invalid(
                format!("groups[{}].name", i),
                format!("duplicate group name '{}'", group.name),
            ));
        }

        if group.default {
            if let Some(first) = explicit_default {
                return Err(ConfigError::invalid(
                    format!("groups[{}].default", i),
                    format!(
                        "only one default group is allowed, '{}' is already the default",
                        config.groups[first].name
                    ),
                ));
            }
            explicit_default = Some(i);
        }
    }

    let default_index = explicit_default.unwrap_or(config.groups.len() - 1);
    for (i, group) in config.groups.iter().enumerate() {
        if i != default_index && group.labels.is_empty() {
            return Err(ConfigError::invalid(
                format!("groups[{}].labels", i),
                format!("group '{}' needs at least one label", group.name),
            ));
        }
    }

    Ok(())
}
