//! Port interfaces for statistics aggregation
//!
//! These traits define the boundaries between the aggregation logic and
//! the query layer that materializes timesheet records.

use async_trait::async_trait;
use tally_domain::{Result, TimeWindow, Timesheet};
use uuid::Uuid;

/// Access to persisted timesheet records.
#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    /// Entries overlapping the window, optionally restricted to one user.
    ///
    /// Implementations may return running entries; the aggregator treats
    /// them as contributing zero.
    async fn find_in_window(
        &self,
        window: &TimeWindow,
        user: Option<Uuid>,
    ) -> Result<Vec<Timesheet>>;
}
