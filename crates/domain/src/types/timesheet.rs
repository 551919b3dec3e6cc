//! Timesheet records and time windows as consumed by the core.
//!
//! Timesheets are owned by the external persistence layer; the core only
//! ever sees them as already-materialized in-memory records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, TallyError};

/// A single recorded work interval for one user, activity, project and
/// customer.
///
/// # Field Invariants
/// - `end` is `None` while recording is active; `duration_seconds` is 0
///   until `end` is set and fixed from then on.
/// - `end >= begin` whenever both are present.
/// - `rate` / `internal_rate` are the already-resolved monetary amounts the
///   upstream layer stamped onto the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Unique timesheet identifier
    pub id: Uuid,
    /// User who recorded the entry
    pub user_id: Uuid,
    /// Activity the work was logged against
    pub activity_id: Uuid,
    /// Project, derived from the activity
    pub project_id: Uuid,
    /// Customer, derived from the project
    pub customer_id: Uuid,
    /// Start of the recorded interval
    pub begin: DateTime<Utc>,
    /// End of the interval; `None` while still recording
    pub end: Option<DateTime<Utc>>,
    /// Recorded duration in seconds (0 while running)
    pub duration_seconds: i64,
    /// IANA timezone identifier the entry was recorded in
    pub timezone: String,
    /// Resolved monetary amount for the entry
    pub rate: f64,
    /// Resolved internal amount, if one was calculated
    pub internal_rate: Option<f64>,
    /// Whether the entry was already exported to an invoice/report
    pub exported: bool,
    /// Whether the entry counts as billable work
    pub billable: bool,
}

impl Timesheet {
    /// True while the entry is still being recorded (`end` unset).
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }
}

/// Inclusive UTC time window for statistics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (inclusive)
    pub begin: DateTime<Utc>,
    /// Window end (inclusive)
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting inverted bounds.
    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < begin {
            return Err(TallyError::InvalidInput(format!(
                "time window end {end} precedes begin {begin}"
            )));
        }
        Ok(Self { begin, end })
    }

    /// Whether a `[begin, end]` interval touches this window.
    pub fn overlaps(&self, begin: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        begin <= self.end && end >= self.begin
    }

    /// Whether an instant falls inside this window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.begin <= instant && instant <= self.end
    }
}
