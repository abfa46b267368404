//! Relnote Tracker - Issue tracker search for release notes
//!
//! This crate queries a hosted issue tracker's search API for merged pull
//! requests attached to a milestone and collects every page of results.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod query;
pub mod types;

pub use client::{GitHubSearch, IssueSearch, DEFAULT_API_URL};
pub use error::{FetchError, Result};
pub use fetcher::{fetch_all, fetch_query, PER_PAGE};
pub use query::SearchQuery;
pub use types::Issue;
