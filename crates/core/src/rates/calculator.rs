//! Monetary amount calculation for resolved rate rules
//!
//! The resolver only picks a rule; turning it into money is the caller's
//! multiplication. Fixed rules are flat fees, hourly rules scale with the
//! recorded duration.

use tally_domain::constants::SECONDS_PER_HOUR;
use tally_domain::RateRule;

/// Billable amount a rule yields for a duration.
///
/// Fixed rules ignore the duration entirely; hourly rules are prorated to
/// the second.
pub fn amount_for(rule: &RateRule, duration_seconds: i64) -> f64 {
    if rule.is_fixed {
        rule.rate
    } else {
        rule.rate * duration_seconds as f64 / SECONDS_PER_HOUR as f64
    }
}

/// Internal (cost) amount a rule yields for a duration.
///
/// Falls back to the billable rate when no internal rate is configured,
/// matching the upstream stamping behavior.
pub fn internal_amount_for(rule: &RateRule, duration_seconds: i64) -> f64 {
    let rate = rule.internal_rate.unwrap_or(rule.rate);
    if rule.is_fixed {
        rate
    } else {
        rate * duration_seconds as f64 / SECONDS_PER_HOUR as f64
    }
}
