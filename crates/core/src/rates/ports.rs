//! Port interfaces for rate resolution
//!
//! These traits define the boundaries between the rate engine and the
//! infrastructure that stores configured rate rules.

use tally_domain::{RateRule, Result, Timesheet};

/// Access to the configured rate rule tables.
///
/// Implementations materialize every rule attached to the entry's
/// activity, project or customer; filtering and ranking happen in the
/// resolver, never in the repository.
pub trait RateRepository: Send + Sync {
    /// All candidate rules for the entry's entity triple.
    fn find_candidate_rules(&self, entry: &Timesheet) -> Result<Vec<RateRule>>;
}
