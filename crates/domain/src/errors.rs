//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Main error type for tally
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TallyError {
    /// A precondition on the input data was violated (inverted ranges,
    /// malformed windows). The caller must fix its data, not retry.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The timezone string carried by a timesheet is not a known IANA
    /// identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The timesheet is still being recorded (`end` unset) and cannot be
    /// split across days.
    #[error("Timesheet {0} is still running")]
    RunningEntry(Uuid),

    /// A repository port implementation failed while materializing input.
    #[error("Repository error: {0}")]
    Repository(String),

    /// Invariant breakage that should never happen with valid input.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for tally operations
pub type Result<T> = std::result::Result<T, TallyError>;
