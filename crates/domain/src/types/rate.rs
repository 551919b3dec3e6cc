//! Rate rules configured at activity, project or customer level.
//!
//! The original data model expressed precedence through a `getScore()`
//! method on a shared base entity. Here the scope is a tagged variant that
//! carries its target id and exposes the fixed score per variant, so the
//! three rule kinds stay one type without inheritance.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{RATE_SCORE_ACTIVITY, RATE_SCORE_CUSTOMER, RATE_SCORE_PROJECT};
use crate::types::timesheet::Timesheet;

/// The entity a rate rule attaches to. Exactly one target per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RuleScope {
    /// Rule attached to a single activity
    Activity(Uuid),
    /// Rule attached to a single project
    Project(Uuid),
    /// Rule attached to a single customer
    Customer(Uuid),
}

impl RuleScope {
    /// Fixed precedence score of this scope. Larger score wins among
    /// generic rules: activity beats project beats customer.
    pub fn precedence_score(&self) -> u32 {
        match self {
            Self::Activity(_) => RATE_SCORE_ACTIVITY,
            Self::Project(_) => RATE_SCORE_PROJECT,
            Self::Customer(_) => RATE_SCORE_CUSTOMER,
        }
    }

    /// Exact identity match against the timesheet's entity triple. A rule
    /// scoped to project P applies only to entries whose project is P, not
    /// to sibling projects of the same customer.
    pub fn matches(&self, entry: &Timesheet) -> bool {
        match self {
            Self::Activity(id) => *id == entry.activity_id,
            Self::Project(id) => *id == entry.project_id,
            Self::Customer(id) => *id == entry.customer_id,
        }
    }
}

/// A configured billing rate, optionally narrowed to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRule {
    /// The activity, project or customer the rule attaches to
    pub scope: RuleScope,
    /// `None` applies to all users; `Some` narrows the rule to one user
    pub user_id: Option<Uuid>,
    /// Billable rate; a flat fee when `is_fixed`, otherwise per hour
    pub rate: f64,
    /// Internal (cost) rate, if configured
    pub internal_rate: Option<f64>,
    /// Flat fee instead of an hourly rate
    pub is_fixed: bool,
}

impl RateRule {
    /// Whether this rule is a candidate for the given entry: the scope must
    /// match exactly and a user-narrowed rule only applies to that user.
    pub fn applies_to(&self, entry: &Timesheet) -> bool {
        if let Some(user_id) = self.user_id {
            if user_id != entry.user_id {
                return false;
            }
        }
        self.scope.matches(entry)
    }

    /// Whether the rule is narrowed to the entry's user.
    pub fn is_user_specific_for(&self, entry: &Timesheet) -> bool {
        self.user_id == Some(entry.user_id)
    }
}
