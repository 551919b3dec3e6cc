//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Rate rule precedence scores. Larger score wins; the baseline applies when
// no rule matches at all.
/// Precedence score of an activity-scoped rate rule.
pub const RATE_SCORE_ACTIVITY: u32 = 5;
/// Precedence score of a project-scoped rate rule.
pub const RATE_SCORE_PROJECT: u32 = 3;
/// Precedence score of a customer-scoped rate rule.
pub const RATE_SCORE_CUSTOMER: u32 = 1;
/// Baseline score when no rule matches.
pub const RATE_SCORE_NONE: u32 = 0;

// Calendar arithmetic
/// Seconds in one hour, used to turn hourly rates into amounts.
pub const SECONDS_PER_HOUR: i64 = 3600;
/// Seconds in one calendar day (ignoring DST transitions).
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Number of months a year bucket always carries.
pub const MONTHS_PER_YEAR: usize = 12;
