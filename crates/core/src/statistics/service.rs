//! Statistics service - core business logic

use std::sync::Arc;

use tally_domain::{Day, Result, TimeWindow, Year};
use tracing::debug;
use uuid::Uuid;

use super::aggregator;
use super::ports::TimesheetRepository;

/// Builds day/month/year statistics through a timesheet repository.
pub struct StatisticsService {
    repository: Arc<dyn TimesheetRepository>,
}

impl StatisticsService {
    /// Create a new statistics service.
    pub fn new(repository: Arc<dyn TimesheetRepository>) -> Self {
        Self { repository }
    }

    /// Gap-filled daily statistics for the window.
    pub async fn daily_statistics(
        &self,
        window: &TimeWindow,
        user: Option<Uuid>,
    ) -> Result<Vec<Day>> {
        let entries = self.repository.find_in_window(window, user).await?;
        debug!(entries = entries.len(), "aggregating daily statistics");
        aggregator::aggregate_daily(&entries, window, user)
    }

    /// Monthly rollups (years descending) for the window.
    pub async fn monthly_statistics(
        &self,
        window: &TimeWindow,
        user: Option<Uuid>,
    ) -> Result<Vec<Year>> {
        let entries = self.repository.find_in_window(window, user).await?;
        debug!(entries = entries.len(), "aggregating monthly statistics");
        aggregator::aggregate_monthly(&entries, window, user)
    }
}
