//! Exit codes for the CLI

use relnote_core::{ConfigError, RelnoteError};
use relnote_tracker::FetchError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Issue tracker query failed
pub const FETCH_ERROR: u8 = 3;

/// Map a command error to the process exit code.
///
/// Usage and configuration errors report a message and still exit
/// successfully; only a failed fetch or an output failure is non-zero.
pub fn for_error(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<RelnoteError>() {
        return match err {
            RelnoteError::Usage(_) | RelnoteError::Config(_) => SUCCESS,
            RelnoteError::Fetch(_) => FETCH_ERROR,
            RelnoteError::Io(_) | RelnoteError::Json(_) => ERROR,
        };
    }
    if err.is::<ConfigError>() {
        return SUCCESS;
    }
    if err.is::<FetchError>() {
        return FETCH_ERROR;
    }
    ERROR
}
