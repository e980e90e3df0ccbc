//! HTTP DTOs for consultation endpoints.
//!
//! These types decouple the wire shapes from the application views, so the
//! API can evolve independently.

use serde::{Deserialize, Serialize};

use crate::application::handlers::consultation::{ConsultationView, RuleView};
use crate::domain::consultation::AnsweredQuestion;
use crate::domain::foundation::FactValue;
use crate::domain::inference::Question;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a consultation; a missing id gets generated.
#[derive(Debug, Clone, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Request carrying an existing session id (restart).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

/// An applicant's answer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Yes,
    No,
    Unknown,
}

impl From<AnswerValue> for FactValue {
    fn from(answer: AnswerValue) -> Self {
        match answer {
            AnswerValue::Yes => FactValue::True,
            AnswerValue::No => FactValue::False,
            AnswerValue::Unknown => FactValue::Unknown,
        }
    }
}

/// Request to answer the current question.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub answer: AnswerValue,
}

fn default_steps() -> usize {
    1
}

/// Request to step backward through the dialogue.
#[derive(Debug, Clone, Deserialize)]
pub struct BackRequest {
    pub session_id: String,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response to start and restart.
#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    pub related_visa_types: Vec<String>,
    pub rules_status: Vec<RuleView>,
    pub is_complete: bool,
}

impl From<ConsultationView> for StartResponse {
    fn from(view: ConsultationView) -> Self {
        Self {
            session_id: view.session_id,
            current_question: view.current_question,
            related_visa_types: view.related_visa_types,
            rules_status: view.rules_status,
            is_complete: view.is_complete,
        }
    }
}

/// Response to answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    pub related_visa_types: Vec<String>,
    pub rules_status: Vec<RuleView>,
    pub derived_facts: Vec<String>,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_result: Option<Vec<String>>,
}

impl From<ConsultationView> for AnswerResponse {
    fn from(view: ConsultationView) -> Self {
        Self {
            session_id: view.session_id,
            current_question: view.current_question,
            related_visa_types: view.related_visa_types,
            rules_status: view.rules_status,
            derived_facts: view.derived_facts,
            is_complete: view.is_complete,
            diagnosis_result: view.diagnosis,
        }
    }
}

/// Response to back.
#[derive(Debug, Clone, Serialize)]
pub struct BackResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    pub related_visa_types: Vec<String>,
    pub answered_questions: Vec<AnsweredQuestion>,
    pub rules_status: Vec<RuleView>,
}

impl From<ConsultationView> for BackResponse {
    fn from(view: ConsultationView) -> Self {
        Self {
            session_id: view.session_id,
            current_question: view.current_question,
            related_visa_types: view.related_visa_types,
            answered_questions: view.answered_questions,
            rules_status: view.rules_status,
        }
    }
}
