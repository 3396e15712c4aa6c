use thiserror::Error;

use super::parser::{MAX_RATING, MIN_RATING};
use crate::teams::MAX_TEAM_COUNT;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error(
        "Line {line}: {field} must be between {min} and {max}, got {value}",
        min = MIN_RATING,
        max = MAX_RATING
    )]
    RangeViolation {
        line: usize,
        field: &'static str,
        value: f64,
    },

    #[error("No players found in submission")]
    EmptySubmission,

    #[error("Team count must be between 1 and {max}, got {0}", max = MAX_TEAM_COUNT)]
    InvalidGroupCount(usize),

    #[error("Unsupported roster document version {0}")]
    UnsupportedVersion(u64),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// True for errors caused by the caller's input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RosterError::MalformedLine { .. }
                | RosterError::RangeViolation { .. }
                | RosterError::EmptySubmission
                | RosterError::InvalidGroupCount(_)
        )
    }
}
