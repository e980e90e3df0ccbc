//! Consultation aggregate entity.
//!
//! A consultation is one applicant's dialogue with the rule base. It pins
//! the snapshot that was current when it started, so rule edits never tear
//! an in-flight consultation.
//!
//! # State
//!
//! The answer history is the sole source of truth. Every mutation replays
//! the full history through the inference engine from an empty fact base;
//! no incremental fact mutation ever happens, which is what guarantees that
//! stepping back and re-answering the same values reproduces an identical
//! state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConsultationId, FactValue, Timestamp};
use crate::domain::inference::{evaluate, EvaluationResult, FactBase};
use crate::domain::knowledge::RuleSnapshot;

/// One entry of the answer history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    /// The fact the question asked about.
    pub fact: String,
    /// The recorded answer.
    pub answer: FactValue,
}

/// Consultation aggregate - an applicant's in-progress or completed dialogue.
///
/// # Invariants
///
/// - `history` length only decreases via `step_back` or `restart`
/// - `result` always equals `evaluate(snapshot, replay(history))`
#[derive(Debug, Clone)]
pub struct Consultation {
    /// Client-supplied identifier.
    id: ConsultationId,

    /// The rule base this consultation runs against, pinned at start.
    snapshot: Arc<RuleSnapshot>,

    /// Ordered (question fact, answer) pairs.
    history: Vec<(String, FactValue)>,

    /// Cached evaluation of the current history.
    result: EvaluationResult,

    /// When the consultation started.
    started_at: Timestamp,

    /// When the history last changed.
    updated_at: Timestamp,
}

impl Consultation {
    /// Starts a consultation against the given snapshot.
    pub fn start(id: ConsultationId, snapshot: Arc<RuleSnapshot>) -> Self {
        let result = evaluate(&snapshot, &FactBase::new());
        let now = Timestamp::now();
        Self {
            id,
            snapshot,
            history: Vec::new(),
            result,
            started_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the consultation id.
    pub fn id(&self) -> &ConsultationId {
        &self.id
    }

    /// Returns the pinned snapshot.
    pub fn snapshot(&self) -> &Arc<RuleSnapshot> {
        &self.snapshot
    }

    /// Returns the answer history in question order.
    pub fn answered_questions(&self) -> Vec<AnsweredQuestion> {
        self.history
            .iter()
            .map(|(fact, answer)| AnsweredQuestion {
                fact: fact.clone(),
                answer: *answer,
            })
            .collect()
    }

    /// Returns the number of answered questions.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the cached evaluation of the current history.
    pub fn result(&self) -> &EvaluationResult {
        &self.result
    }

    /// Returns true when no further question remains.
    pub fn is_complete(&self) -> bool {
        self.result.is_complete
    }

    /// Returns when the consultation started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the history last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer to the current question and re-evaluates.
    ///
    /// Returns `false` without touching the history when the consultation is
    /// already complete (there is no current question to answer).
    pub fn answer(&mut self, value: FactValue) -> bool {
        let fact = match &self.result.next_question {
            Some(question) => question.fact.clone(),
            None => return false,
        };
        self.history.push((fact, value));
        self.replay();
        true
    }

    /// Steps back through the dialogue, dropping the last `steps` answers.
    ///
    /// `steps` is clamped to the history length. Returns the number of
    /// answers actually dropped. Completion and diagnosis are recomputed
    /// from the truncated history, so a completed consultation reopens.
    pub fn step_back(&mut self, steps: usize) -> usize {
        let dropped = steps.min(self.history.len());
        if dropped > 0 {
            self.history.truncate(self.history.len() - dropped);
            self.replay();
        }
        dropped
    }

    /// Clears the whole history, returning the consultation to its initial
    /// state against the same pinned snapshot.
    pub fn restart(&mut self) {
        self.history.clear();
        self.replay();
    }

    /// Re-evaluates the full history from an empty fact base.
    fn replay(&mut self) {
        let mut facts = FactBase::new();
        for (fact, answer) in &self.history {
            facts.set(fact.clone(), *answer);
        }
        self.result = evaluate(&self.snapshot, &facts);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CombineMode, SnapshotVersion};
    use crate::domain::knowledge::{Condition, Rule};

    fn asked(fact: &str) -> Condition {
        Condition::requires(fact).with_question(format!("{}?", fact))
    }

    fn snapshot(rules: Vec<Rule>) -> Arc<RuleSnapshot> {
        Arc::new(RuleSnapshot::new(SnapshotVersion::initial(), rules))
    }

    fn two_question_snapshot() -> Arc<RuleSnapshot> {
        snapshot(vec![Rule::new(
            "H-1B",
            "Specialty occupation",
            vec![asked("has_job_offer"), asked("has_degree")],
            CombineMode::And,
            "eligible_h1b",
        )
        .unwrap()])
    }

    fn consultation() -> Consultation {
        Consultation::start(
            ConsultationId::new("test-session").unwrap(),
            two_question_snapshot(),
        )
    }

    #[test]
    fn start_asks_the_first_question() {
        let c = consultation();
        assert_eq!(c.history_len(), 0);
        assert!(!c.is_complete());
        assert_eq!(
            c.result().next_question.as_ref().unwrap().fact,
            "has_job_offer"
        );
    }

    #[test]
    fn answer_appends_and_advances() {
        let mut c = consultation();
        assert!(c.answer(FactValue::True));
        assert_eq!(c.history_len(), 1);
        assert_eq!(
            c.result().next_question.as_ref().unwrap().fact,
            "has_degree"
        );
    }

    #[test]
    fn answering_all_questions_completes() {
        let mut c = consultation();
        c.answer(FactValue::True);
        c.answer(FactValue::True);
        assert!(c.is_complete());
        let diagnosis = c.result().diagnosis.as_ref().unwrap();
        assert!(diagnosis.contains("H-1B"));
    }

    #[test]
    fn answer_after_completion_is_ignored() {
        let mut c = consultation();
        c.answer(FactValue::True);
        c.answer(FactValue::True);
        assert!(!c.answer(FactValue::False));
        assert_eq!(c.history_len(), 2);
    }

    #[test]
    fn step_back_reopens_a_completed_consultation() {
        let mut c = consultation();
        c.answer(FactValue::True);
        c.answer(FactValue::False);
        assert!(c.is_complete());

        let dropped = c.step_back(1);
        assert_eq!(dropped, 1);
        assert!(!c.is_complete());
        assert!(c.result().diagnosis.is_none());
        assert_eq!(
            c.result().next_question.as_ref().unwrap().fact,
            "has_degree"
        );
    }

    #[test]
    fn step_back_clamps_to_history_length() {
        let mut c = consultation();
        c.answer(FactValue::True);
        let dropped = c.step_back(10);
        assert_eq!(dropped, 1);
        assert_eq!(c.history_len(), 0);
    }

    #[test]
    fn step_back_zero_is_a_no_op() {
        let mut c = consultation();
        c.answer(FactValue::True);
        let before = c.result().clone();
        assert_eq!(c.step_back(0), 0);
        assert_eq!(c.result(), &before);
    }

    #[test]
    fn back_then_same_answers_reproduces_state() {
        let mut c = consultation();
        c.answer(FactValue::True);
        c.answer(FactValue::False);
        let before = c.result().clone();

        c.step_back(2);
        c.answer(FactValue::True);
        c.answer(FactValue::False);

        assert_eq!(c.result(), &before);
    }

    #[test]
    fn restart_clears_history() {
        let mut c = consultation();
        c.answer(FactValue::True);
        c.answer(FactValue::True);
        c.restart();
        assert_eq!(c.history_len(), 0);
        assert!(!c.is_complete());
    }

    #[test]
    fn answers_are_recorded_against_the_asked_fact() {
        let mut c = consultation();
        c.answer(FactValue::Unknown);
        let history = c.answered_questions();
        assert_eq!(history[0].fact, "has_job_offer");
        assert_eq!(history[0].answer, FactValue::Unknown);
    }
}
