//! Statistic buckets produced by the time-range aggregator
//!
//! These are plain output data consumed by reporting and dashboard layers.
//! All buckets carry a total duration in seconds plus the summed monetary
//! amount of the entries (or entry fragments) that fell into them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;

/* -------------------------------------------------------------------------- */
/* Day-Level Output */
/* -------------------------------------------------------------------------- */

/// The portion of one timesheet entry attributed to a single calendar day.
///
/// Produced by the duration splitter; entries spanning midnight yield one
/// fragment per day touched, with the amount shared proportionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayFragment {
    /// Calendar day (in the entry's own timezone)
    pub date: NaiveDate,
    /// Seconds of the entry that fall on this day
    pub duration_seconds: i64,
    /// Proportional share of the entry's monetary amount
    pub amount: f64,
}

/// Daily statistic bucket.
///
/// # Field Invariants
/// - Every calendar day of a requested window appears exactly once, even
///   with zero recorded activity (gap-filling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Calendar day the bucket covers
    pub date: NaiveDate,
    /// Total recorded seconds on this day
    pub duration_seconds: i64,
    /// Total monetary amount attributed to this day
    pub amount: f64,
}

impl Day {
    /// Empty bucket for a date.
    pub fn empty(date: NaiveDate) -> Self {
        Self { date, duration_seconds: 0, amount: 0.0 }
    }

    /// Fold one fragment into the bucket.
    pub fn add_fragment(&mut self, fragment: &DayFragment) {
        self.duration_seconds += fragment.duration_seconds;
        self.amount += fragment.amount;
    }
}

/* -------------------------------------------------------------------------- */
/* Month / Year Output */
/* -------------------------------------------------------------------------- */

/// Monthly statistic bucket. A year owns exactly twelve of these,
/// pre-filled with zero even when no data exists for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Month {
    /// Month number, 1 through 12
    pub month: u32,
    /// Total recorded seconds in this month
    pub duration_seconds: i64,
    /// Total monetary amount in this month
    pub amount: f64,
}

/// Yearly rollup owning twelve pre-zeroed months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Year {
    /// Calendar year
    pub year: i32,
    /// The twelve months, ascending, always fully populated
    pub months: Vec<Month>,
}

impl Year {
    /// A year with all twelve months zeroed.
    pub fn new(year: i32) -> Self {
        let months = (1..=MONTHS_PER_YEAR as u32)
            .map(|month| Month { month, duration_seconds: 0, amount: 0.0 })
            .collect();
        Self { year, months }
    }

    /// Month bucket by 1-based number.
    pub fn month(&self, number: u32) -> Option<&Month> {
        self.months.get(number.checked_sub(1)? as usize)
    }

    /// Mutable month bucket by 1-based number.
    pub fn month_mut(&mut self, number: u32) -> Option<&mut Month> {
        self.months.get_mut(number.checked_sub(1)? as usize)
    }
}
