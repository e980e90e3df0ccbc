//! Read models assembled from a consultation for the outside world.

use serde::{Deserialize, Serialize};

use crate::domain::consultation::{AnsweredQuestion, Consultation};
use crate::domain::foundation::{CombineMode, FactValue, RuleStatus, SnapshotVersion};
use crate::domain::inference::{FactBase, Question};

/// Display state of one condition within a rule card.
///
/// Distinguishes an explicit "don't know" answer from a fact that was never
/// asked or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionState {
    True,
    False,
    Unknown,
    Unchecked,
}

/// One condition of a rule, with its current display state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionView {
    pub fact: String,
    pub expected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub state: ConditionState,
    /// True when some rule produces this fact.
    pub is_derived: bool,
}

/// One rule with its evaluation status, for the rule overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleView {
    pub action: String,
    pub name: String,
    pub visa_type: String,
    pub combine_mode: CombineMode,
    pub status: RuleStatus,
    pub conditions: Vec<ConditionView>,
}

/// Full externally-visible state of one consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationView {
    pub session_id: String,
    pub snapshot_version: SnapshotVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    /// Visa types of the rules the current question feeds into.
    pub related_visa_types: Vec<String>,
    pub answered_questions: Vec<AnsweredQuestion>,
    pub rules_status: Vec<RuleView>,
    /// The full fact base after forward chaining.
    pub facts: FactBase,
    pub derived_facts: Vec<String>,
    pub is_complete: bool,
    /// Eligible visa type codes; present only on completion.
    #[serde(rename = "diagnosis_result", skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<String>>,
}

impl ConsultationView {
    /// Assembles the view for a consultation's current state.
    pub fn assemble(consultation: &Consultation) -> Self {
        let snapshot = consultation.snapshot();
        let result = consultation.result();
        let produced = snapshot.actions();

        let rules_status = snapshot
            .rules()
            .iter()
            .map(|rule| {
                let conditions = rule
                    .conditions()
                    .iter()
                    .map(|condition| {
                        let state = if result.facts.contains(&condition.fact) {
                            match result.facts.get(&condition.fact) {
                                FactValue::True => ConditionState::True,
                                FactValue::False => ConditionState::False,
                                FactValue::Unknown => ConditionState::Unknown,
                            }
                        } else {
                            ConditionState::Unchecked
                        };
                        ConditionView {
                            fact: condition.fact.clone(),
                            expected: condition.expected,
                            question: condition.question.clone(),
                            state,
                            is_derived: produced.contains(condition.fact.as_str()),
                        }
                    })
                    .collect();
                RuleView {
                    action: rule.action().to_string(),
                    name: rule.name().to_string(),
                    visa_type: rule.visa_type().to_string(),
                    combine_mode: rule.combine_mode(),
                    status: result
                        .status_of(rule.action())
                        .unwrap_or_default(),
                    conditions,
                }
            })
            .collect();

        let related_visa_types = match &result.next_question {
            Some(question) => snapshot
                .visa_types_referencing(&question.fact)
                .into_iter()
                .collect(),
            None => Vec::new(),
        };

        Self {
            session_id: consultation.id().to_string(),
            snapshot_version: snapshot.version(),
            current_question: result.next_question.clone(),
            related_visa_types,
            answered_questions: consultation.answered_questions(),
            rules_status,
            facts: result.facts.clone(),
            derived_facts: result.derived_facts.clone(),
            is_complete: result.is_complete,
            diagnosis: result
                .diagnosis
                .as_ref()
                .map(|codes| codes.iter().cloned().collect()),
        }
    }
}
