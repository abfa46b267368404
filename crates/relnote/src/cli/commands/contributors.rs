//! Contributors command

use clap::Args;
use tracing::info;

use relnote_changelog::ChangelogGenerator;
use relnote_core::Milestone;

use super::{runtime, ReleaseArgs};
use crate::cli::{output, Cli, OutputFormat};

/// Generate the contributor list of a milestone
#[derive(Debug, Args)]
pub struct ContributorsCommand {
    #[command(flatten)]
    pub release: ReleaseArgs,
}

impl ContributorsCommand {
    /// Execute the contributors command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(milestone = ?self.release.milestone, config = ?self.release.config, "executing contributors command");
        let milestone = Milestone::parse(self.release.milestone.as_deref())?;

        let config = self.release.load_config()?;
        let generator = ChangelogGenerator::new(config)?;

        let search = self.release.search();
        let contributors = runtime()?
            .block_on(generator.fetch_contributors(&search, Some(milestone.as_str())))?;

        if contributors.is_empty() && !cli.quiet {
            output::warning(&format!(
                "No merged pull requests found for milestone {}",
                milestone
            ));
        }

        let document = match cli.format {
            OutputFormat::Json => contributors.to_json()?,
            OutputFormat::Text => contributors.to_markdown(&self.release.web_url),
        };

        output::emit(&document, self.release.output.as_deref(), cli.quiet)?;
        Ok(())
    }
}
