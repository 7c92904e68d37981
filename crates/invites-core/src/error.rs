//! Error types for invites-core.

use thiserror::Error;

/// Errors raised when finalizing a draft into a record.
#[derive(Debug, Error)]
pub enum DraftError {
    /// A required field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The date field did not parse as YYYY-MM-DD.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The time field did not parse as HH:MM.
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
}
