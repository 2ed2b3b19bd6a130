//! Error types for guest-hours.

use thiserror::Error;

/// Errors that can occur while building the guest hours page.
#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Could not write output: {0}")]
    Write(String),
}

impl HoursError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        HoursError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for guest-hours operations.
pub type HoursResult<T> = Result<T, HoursError>;
