//! Shared types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RelnoteError, Result};

/// A release milestone name, as used by the tracker
///
/// Kept verbatim; only blank values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milestone(String);

impl Milestone {
    /// Validate a milestone supplied on the command line
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.to_string())),
            _ => Err(RelnoteError::usage("Please specify a milestone")),
        }
    }

    /// Milestone text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
