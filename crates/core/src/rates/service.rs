//! Rate service - core business logic

use std::sync::Arc;

use tally_domain::{RateRule, Result, Timesheet};
use tracing::debug;

use super::calculator::{amount_for, internal_amount_for};
use super::ports::RateRepository;
use super::resolver::{PrecedencePolicy, RateResolver};

/// Resolves effective rates for timesheets through a rate repository.
pub struct RateService {
    repository: Arc<dyn RateRepository>,
    resolver: RateResolver,
}

impl RateService {
    /// Create a new rate service with the default precedence policy.
    pub fn new(repository: Arc<dyn RateRepository>) -> Self {
        Self { repository, resolver: RateResolver::default() }
    }

    /// Override the precedence policy used to rank candidate rules.
    pub fn with_policy(mut self, policy: PrecedencePolicy) -> Self {
        self.resolver = RateResolver::new(policy);
        self
    }

    /// Resolve the effective rule for an entry.
    ///
    /// `None` means no configured rule matched; the caller decides the
    /// baseline fallback.
    pub fn resolve_rate(&self, entry: &Timesheet) -> Result<Option<RateRule>> {
        let candidates = self.repository.find_candidate_rules(entry)?;
        let resolved = self.resolver.resolve(entry, &candidates).cloned();

        if resolved.is_none() {
            debug!(
                timesheet = %entry.id,
                candidates = candidates.len(),
                "no configured rate matched, caller falls back to baseline"
            );
        }

        Ok(resolved)
    }

    /// Resolve and compute the `(amount, internal_amount)` pair for the
    /// entry's recorded duration. `None` when no rule matched.
    pub fn amounts_for(&self, entry: &Timesheet) -> Result<Option<(f64, f64)>> {
        let resolved = self.resolve_rate(entry)?;
        Ok(resolved.map(|rule| {
            (
                amount_for(&rule, entry.duration_seconds),
                internal_amount_for(&rule, entry.duration_seconds),
            )
        }))
    }
}
