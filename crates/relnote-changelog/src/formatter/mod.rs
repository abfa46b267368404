//! Changelog formatters

mod json;
mod markdown;

pub use json::JsonFormatter;
pub use markdown::{render_changelog, MarkdownFormatter, DEFAULT_WEB_URL};

use relnote_core::GroupConfig;

use crate::types::{ClassifiedResult, ReleaseInfo};

/// Trait for changelog formatters
///
/// Groups are emitted in the order of `groups`; groups without issues are
/// left out. Output depends only on the arguments.
pub trait ChangelogFormatter: Send + Sync {
    /// Format classified issues for a release
    fn format(
        &self,
        release: &ReleaseInfo,
        classified: &ClassifiedResult,
        groups: &[GroupConfig],
    ) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
