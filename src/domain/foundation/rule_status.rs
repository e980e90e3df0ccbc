//! RuleStatus enum for tracking per-rule evaluation outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation status of a single rule within one inference pass.
///
/// `Pending` and `Evaluating` are transient: a rule is `Pending` until the
/// pass reaches it (or forever, if it sits on a cyclic dependency the pass
/// refuses to enter) and `Evaluating` while its own conditions are being
/// combined. `Fired`, `Blocked` and `Uncertain` are terminal for the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    #[default]
    Pending,
    Evaluating,
    Fired,
    Blocked,
    Uncertain,
}

impl RuleStatus {
    /// Returns true if the rule reached a definite outcome (fired or blocked).
    pub fn is_resolved(&self) -> bool {
        matches!(self, RuleStatus::Fired | RuleStatus::Blocked)
    }

    /// Returns true if the pass finished with this rule (no further question
    /// can change it within the same pass).
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            RuleStatus::Fired | RuleStatus::Blocked | RuleStatus::Uncertain
        )
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleStatus::Pending => "pending",
            RuleStatus::Evaluating => "evaluating",
            RuleStatus::Fired => "fired",
            RuleStatus::Blocked => "blocked",
            RuleStatus::Uncertain => "uncertain",
        };
        write!(f, "{}", s)
    }
}
