//! Evaluation result types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RuleStatus;

use super::fact_base::FactBase;

/// The next clarifying question to put to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The fact the answer will be recorded under.
    pub fact: String,
    /// Pre-authored prompt text; falls back to the fact name when the
    /// condition carries no prompt.
    pub prompt: String,
}

/// Outcome of one evaluation pass over a snapshot.
///
/// Fully determined by the snapshot and the input fact base; evaluating the
/// same pair twice yields an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Status of every rule, keyed by action.
    pub rule_statuses: BTreeMap<String, RuleStatus>,

    /// The fact base after forward chaining.
    pub facts: FactBase,

    /// Actions asserted during the pass, in assertion order.
    pub derived_facts: Vec<String>,

    /// The next question, when the consultation is not complete.
    pub next_question: Option<Question>,

    /// True when no rule remains uncertain.
    pub is_complete: bool,

    /// Visa type codes with at least one fired rule; present only on
    /// completion.
    pub diagnosis: Option<BTreeSet<String>>,
}

impl EvaluationResult {
    /// Returns the status recorded for the given action.
    pub fn status_of(&self, action: &str) -> Option<RuleStatus> {
        self.rule_statuses.get(action).copied()
    }
}
