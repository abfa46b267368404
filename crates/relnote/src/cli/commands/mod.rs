//! CLI commands

mod changelog;
mod completions;
mod contributors;

pub use changelog::ChangelogCommand;
pub use completions::CompletionsCommand;
pub use contributors::ContributorsCommand;

use std::path::PathBuf;

use clap::Args;
use relnote_changelog::formatter::DEFAULT_WEB_URL;
use relnote_core::config::load_config_or_default;
use relnote_core::{Config, RelnoteError};
use relnote_tracker::{GitHubSearch, DEFAULT_API_URL};

/// Arguments shared by the milestone commands
#[derive(Debug, Args)]
pub struct ReleaseArgs {
    /// Milestone to generate for
    #[arg(short, long)]
    pub milestone: Option<String>,

    /// Config file (YAML, or TOML with a .toml extension); built-in config if omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Issue tracker API base URL
    #[arg(long, env = "RELNOTE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL for release tag and profile links
    #[arg(long, env = "RELNOTE_WEB_URL", default_value = DEFAULT_WEB_URL)]
    pub web_url: String,
}

impl ReleaseArgs {
    /// Resolve the configuration source
    pub fn load_config(&self) -> Result<Config, RelnoteError> {
        Ok(load_config_or_default(self.config.as_deref())?)
    }

    /// Search client for the configured tracker
    pub fn search(&self) -> GitHubSearch {
        GitHubSearch::with_api_url(&self.api_url)
    }
}

/// Single-threaded runtime: pages are fetched strictly one after another
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
