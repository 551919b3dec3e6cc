//! Rate rule resolution
//!
//! Picks the single effective rate rule for a timesheet out of the
//! candidate rules configured at activity, project and customer level,
//! each optionally narrowed to one user.
//!
//! The upstream system evaluated the three scopes through independent
//! queries merged by the caller, which left the ordering between a
//! user-specific low-scope rule and a generic high-scope rule ambiguous.
//! That ordering is therefore an explicit, testable policy here instead of
//! a hard-coded assumption.

use tally_domain::{RateRule, Timesheet};

/// Total ordering between user-specificity and scope precedence.
///
/// Both policies produce a lexicographic ranking key per candidate; the
/// resolver picks the maximum. Scope scores are fixed per variant
/// (activity 5, project 3, customer 1), so within one tier the ordering is
/// always activity > project > customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecedencePolicy {
    /// A rule narrowed to the entry's user beats every generic rule,
    /// regardless of scope; scope score only breaks ties within a tier.
    /// A user-specific customer rate beats a generic activity rate.
    #[default]
    UserOverScope,
    /// Scope score wins first; user-specificity only breaks ties between
    /// rules of the same scope. A generic activity rate beats a
    /// user-specific customer rate.
    ScopeOverUser,
}

impl PrecedencePolicy {
    /// Ranking key for a candidate rule; lexicographically larger wins.
    fn rank(self, rule: &RateRule, entry: &Timesheet) -> (u32, u32) {
        let user_match = u32::from(rule.is_user_specific_for(entry));
        let score = rule.scope.precedence_score();
        match self {
            Self::UserOverScope => (user_match, score),
            Self::ScopeOverUser => (score, user_match),
        }
    }
}

/// Resolves the effective rate rule for a timesheet entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateResolver {
    policy: PrecedencePolicy,
}

impl RateResolver {
    /// Create a resolver with an explicit precedence policy.
    pub fn new(policy: PrecedencePolicy) -> Self {
        Self { policy }
    }

    /// The policy this resolver ranks candidates with.
    pub fn policy(&self) -> PrecedencePolicy {
        self.policy
    }

    /// Pick the best-matching rule for the entry, or `None` when nothing
    /// applies.
    ///
    /// # Algorithm
    /// 1. Drop candidates whose scope does not exactly match the entry's
    ///    activity/project/customer, and rules narrowed to another user.
    /// 2. Rank the remaining candidates with the configured policy.
    /// 3. Keep the first candidate in input order among equally ranked
    ///    ones. Equal ranks only occur with malformed candidate data (each
    ///    scope has one fixed score), so callers should treat that case as
    ///    undefined rather than rely on it.
    ///
    /// Pure and deterministic; never fails. An empty result is the normal
    /// "fall back to the baseline rate" signal for the caller.
    pub fn resolve<'a>(
        &self,
        entry: &Timesheet,
        candidates: &'a [RateRule],
    ) -> Option<&'a RateRule> {
        let mut best: Option<(&'a RateRule, (u32, u32))> = None;

        for rule in candidates {
            if !rule.applies_to(entry) {
                continue;
            }

            let rank = self.policy.rank(rule, entry);
            // Strictly-greater replacement keeps the first candidate on ties
            match best {
                Some((_, best_rank)) if rank <= best_rank => {}
                _ => best = Some((rule, rank)),
            }
        }

        best.map(|(rule, _)| rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tally_domain::RuleScope;
    use uuid::Uuid;

    fn entry() -> Timesheet {
        Timesheet {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            activity_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            begin: Utc::now(),
            end: Some(Utc::now()),
            duration_seconds: 3600,
            timezone: "UTC".to_string(),
            rate: 0.0,
            internal_rate: None,
            exported: false,
            billable: true,
        }
    }

    fn rule(scope: RuleScope, user_id: Option<Uuid>, rate: f64) -> RateRule {
        RateRule { scope, user_id, rate, internal_rate: None, is_fixed: false }
    }

    #[test]
    fn test_no_candidates_returns_none() {
        let entry = entry();
        let resolver = RateResolver::default();

        assert!(resolver.resolve(&entry, &[]).is_none());
    }

    #[test]
    fn test_no_matching_entity_returns_none() {
        let entry = entry();
        let resolver = RateResolver::default();

        // All candidates target other entities
        let candidates = vec![
            rule(RuleScope::Activity(Uuid::new_v4()), None, 80.0),
            rule(RuleScope::Project(Uuid::new_v4()), None, 60.0),
            rule(RuleScope::Customer(Uuid::new_v4()), None, 40.0),
        ];

        assert!(resolver.resolve(&entry, &candidates).is_none());
    }

    #[test]
    fn test_generic_scope_precedence() {
        // Activity (score 5) beats customer (score 1) among generic rules
        let entry = entry();
        let resolver = RateResolver::default();

        let candidates = vec![
            rule(RuleScope::Customer(entry.customer_id), None, 40.0),
            rule(RuleScope::Activity(entry.activity_id), None, 80.0),
            rule(RuleScope::Project(entry.project_id), None, 60.0),
        ];

        let resolved = resolver.resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.scope, RuleScope::Activity(entry.activity_id));
        assert_eq!(resolved.rate, 80.0);
    }

    #[test]
    fn test_rule_for_other_user_is_ignored() {
        let entry = entry();
        let resolver = RateResolver::default();

        let candidates = vec![
            rule(RuleScope::Activity(entry.activity_id), Some(Uuid::new_v4()), 120.0),
            rule(RuleScope::Customer(entry.customer_id), None, 40.0),
        ];

        let resolved = resolver.resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 40.0);
    }

    #[test]
    fn test_user_over_scope_policy() {
        // Canonical regression for the documented tie-break: generic
        // activity rate $50/h vs project rate $40/h narrowed to the
        // entry's user. Default policy prefers the user-specific rule.
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Activity(entry.activity_id), None, 50.0),
            rule(RuleScope::Project(entry.project_id), Some(entry.user_id), 40.0),
        ];

        let resolver = RateResolver::new(PrecedencePolicy::UserOverScope);
        let resolved = resolver.resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 40.0);
        assert!(resolved.is_user_specific_for(&entry));
    }

    #[test]
    fn test_scope_over_user_policy() {
        // Same scenario under the alternate policy: the generic activity
        // rule wins on scope score.
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Activity(entry.activity_id), None, 50.0),
            rule(RuleScope::Project(entry.project_id), Some(entry.user_id), 40.0),
        ];

        let resolver = RateResolver::new(PrecedencePolicy::ScopeOverUser);
        let resolved = resolver.resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 50.0);
        assert!(!resolved.is_user_specific_for(&entry));
    }

    #[test]
    fn test_user_specific_customer_beats_generic_activity_by_default() {
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Activity(entry.activity_id), None, 90.0),
            rule(RuleScope::Customer(entry.customer_id), Some(entry.user_id), 30.0),
        ];

        let resolved = RateResolver::default().resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 30.0);
    }

    #[test]
    fn test_user_tier_still_ranks_by_scope() {
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Customer(entry.customer_id), Some(entry.user_id), 30.0),
            rule(RuleScope::Activity(entry.activity_id), Some(entry.user_id), 95.0),
        ];

        let resolved = RateResolver::default().resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 95.0);
    }

    #[test]
    fn test_malformed_tie_takes_first_in_input_order() {
        // Two generic rules on the same scope carry the same score; the
        // first candidate wins. Callers should avoid producing such input.
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Project(entry.project_id), None, 61.0),
            rule(RuleScope::Project(entry.project_id), None, 62.0),
        ];

        let resolved = RateResolver::default().resolve(&entry, &candidates).unwrap();
        assert_eq!(resolved.rate, 61.0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let entry = entry();
        let candidates = vec![
            rule(RuleScope::Customer(entry.customer_id), None, 40.0),
            rule(RuleScope::Project(entry.project_id), Some(entry.user_id), 55.0),
            rule(RuleScope::Activity(entry.activity_id), None, 80.0),
        ];

        let resolver = RateResolver::default();
        let first = resolver.resolve(&entry, &candidates).cloned();
        for _ in 0..10 {
            assert_eq!(resolver.resolve(&entry, &candidates).cloned(), first);
        }
    }
}
