//! Relnote Core - Core library for release notes generation
//!
//! This crate provides the error hierarchy, the configuration model and the
//! small shared types used by the changelog and CLI crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ConfigFormat, GroupConfig};
pub use error::{ConfigError, RelnoteError, Result};
pub use types::Milestone;
