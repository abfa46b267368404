//! Error types for relnote

use std::path::PathBuf;
use thiserror::Error;

pub use relnote_tracker::FetchError;

/// Result type alias using RelnoteError
pub type Result<T> = std::result::Result<T, RelnoteError>;

/// Main error type for relnote operations
#[derive(Debug, Error)]
pub enum RelnoteError {
    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),

    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Issue tracker query failed
    #[error("Failed to fetch issues: {0}")]
    Fetch(#[from] FetchError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RelnoteError {
    /// Create a usage error with a message
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Self::Usage(msg.into())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Load config from file {path} failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration bytes are not valid UTF-8
    #[error("Configuration is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No groups declared
    #[error("Invalid configuration: at least one group is required")]
    NoGroups,

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: RelnoteError = ConfigError::NoGroups.into();
        assert!(matches!(err, RelnoteError::Config(ConfigError::NoGroups)));
        assert!(err.to_string().contains("at least one group"));
    }

    #[test]
    fn test_fetch_error_converts() {
        let err: RelnoteError = FetchError::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Failed to fetch issues: API error: 500 - boom"
        );
    }
}
