//! Domain types and models

pub mod rate;
pub mod stats;
pub mod timesheet;

// Re-export the main types for convenience
pub use rate::{RateRule, RuleScope};
pub use stats::{Day, DayFragment, Month, Year};
pub use timesheet::{TimeWindow, Timesheet};
