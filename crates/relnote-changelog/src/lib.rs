//! Relnote Changelog - Release notes and contributor lists
//!
//! This crate sorts fetched pull requests into configured label groups and
//! renders them as Markdown (or JSON) release notes.

pub mod classifier;
pub mod contributors;
pub mod formatter;
pub mod generator;
pub mod index;
pub mod types;

pub use classifier::classify;
pub use contributors::{render_contributors, Contributors};
pub use formatter::{render_changelog, ChangelogFormatter, JsonFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use index::LabelIndex;
pub use types::{ClassifiedResult, GroupIssues, ReleaseInfo};
