//! Configuration loading

use std::path::Path;

use tracing::{debug, info};

use crate::error::ConfigError;

use super::defaults::DEFAULT_CONFIG_YAML;
use super::types::Config;
use super::validation::validate_config;

/// Syntax of a configuration document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML document
    #[default]
    Yaml,
    /// TOML document
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|e| e == "toml") {
            Self::Toml
        } else {
            Self::Yaml
        }
    }
}

/// Parse and validate a configuration document
pub fn parse_config(raw: &[u8], format: ConfigFormat) -> Result<Config, ConfigError> {
    let config: Config = match format {
        ConfigFormat::Yaml => serde_yaml::from_slice(raw)?,
        ConfigFormat::Toml => toml::from_str(std::str::from_utf8(raw)?)?,
    };

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let format = ConfigFormat::from_path(path);
    info!(path = %path.display(), ?format, "loading config");

    let content = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content, format)?;
    debug!(path = %path.display(), groups = config.groups.len(), "config loaded and validated");
    Ok(config)
}

/// Load the given file, or the embedded configuration when no path is given
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            debug!("no config path given, using embedded configuration");
            parse_config(DEFAULT_CONFIG_YAML.as_bytes(), ConfigFormat::Yaml)
        }
    }
}
