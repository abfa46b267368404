//! Changelog command

use chrono::Local;
use clap::Args;
use tracing::info;

use relnote_changelog::{ChangelogGenerator, JsonFormatter, MarkdownFormatter};
use relnote_core::Milestone;

use super::{runtime, ReleaseArgs};
use crate::cli::{output, Cli, OutputFormat};

/// Generate the changelog of a milestone
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    #[command(flatten)]
    pub release: ReleaseArgs,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(milestone = ?self.release.milestone, config = ?self.release.config, "executing changelog command");
        let milestone = Milestone::parse(self.release.milestone.as_deref())?;

        let config = self.release.load_config()?;
        let generator = ChangelogGenerator::new(config)?;
        let generator = match cli.format {
            OutputFormat::Json => generator.with_formatter(JsonFormatter::new()),
            OutputFormat::Text => generator
                .with_formatter(MarkdownFormatter::new().with_web_url(&self.release.web_url)),
        };

        let search = self.release.search();
        let today = Local::now().date_naive();
        let changelog = runtime()?.block_on(generator.fetch_and_generate(
            &search,
            Some(milestone.as_str()),
            today,
        ))?;

        output::emit(&changelog, self.release.output.as_deref(), cli.quiet)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use relnote_core::RelnoteError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_missing_milestone_is_usage_error() {
        // The API URL points nowhere; a request would fail with a fetch error.
        let cli = Cli::try_parse_from([
            "relnote",
            "changelog",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        let err = cli.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RelnoteError>(),
            Some(RelnoteError::Usage(_))
        ));
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("relnote.yml");
        std::fs::write(&path, "repo: o/r\ngroups: []\n").unwrap();

        let cli = Cli::try_parse_from([
            "relnote",
            "changelog",
            "-m",
            "1.0",
            "-c",
            path.to_str().unwrap(),
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        let err = cli.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RelnoteError>(),
            Some(RelnoteError::Config(_))
        ));
    }

    #[test]
    fn test_release_link_uses_web_url() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/search/issues"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"{"items": [{ "id": 1, "number": 7, "title": "Fix crash",
                        "user": { "login": "bob" }, "labels": [{ "name": "kind/bug" }] }]}"#,
                ))
                .mount(&server)
                .await;
            server
        });
        let temp = tempfile::TempDir::new().unwrap();
        let out = temp.path().join("CHANGELOG.md");

        let cli = Cli::try_parse_from([
            "relnote",
            "--quiet",
            "changelog",
            "-m",
            "1.5.0",
            "-o",
            out.to_str().unwrap(),
            "--api-url",
            &server.uri(),
            "--web-url",
            "https://git.example.com",
        ])
        .unwrap();
        cli.execute().unwrap();

        let changelog = std::fs::read_to_string(&out).unwrap();
        assert!(changelog.starts_with(
            "## [1.5.0](https://git.example.com/go-gitea/gitea/releases/tag/v1.5.0) - "
        ));
        assert!(changelog.ends_with("* BUGFIXES\n  * Fix crash (#7)\n"));
    }
}
