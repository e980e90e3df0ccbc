//! Shared HTTP error envelope.
//!
//! Every error response carries a `detail` field holding either a plain
//! message or a list of field-level entries; clients join list entries into
//! one display message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::consultation::ConsultationError;
use crate::domain::knowledge::{Issue, KnowledgeError};

/// One entry of a detail list.
#[derive(Debug, Clone, Serialize)]
pub struct DetailEntry {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rule_refs: Vec<String>,
}

/// The `detail` payload: a message or a list of entries.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Entries(Vec<DetailEntry>),
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

impl ErrorResponse {
    /// Builds a plain-message error body.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(message.into()),
        }
    }

    /// Builds an issue-list error body.
    pub fn issues(issues: &[Issue]) -> Self {
        Self {
            detail: ErrorDetail::Entries(
                issues
                    .iter()
                    .map(|issue| DetailEntry {
                        msg: issue.message.clone(),
                        severity: Some(issue.severity.to_string()),
                        rule_refs: issue.rule_refs.clone(),
                    })
                    .collect(),
            ),
        }
    }
}

/// Maps a consultation error to its HTTP response.
pub fn consultation_error_response(error: ConsultationError) -> Response {
    match &error {
        ConsultationError::NotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::message(error.message()))).into_response()
        }
        ConsultationError::SnapshotInvalid { issues } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::issues(issues)),
        )
            .into_response(),
        ConsultationError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(error.message())),
        )
            .into_response(),
        ConsultationError::Infrastructure(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::message(error.message())),
        )
            .into_response(),
    }
}

/// Maps a knowledge error to its HTTP response.
pub fn knowledge_error_response(error: KnowledgeError) -> Response {
    let status = match &error {
        KnowledgeError::DuplicateAction(_) | KnowledgeError::DuplicateVisaType(_) => {
            StatusCode::CONFLICT
        }
        KnowledgeError::RuleNotFound(_) | KnowledgeError::VisaTypeNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        KnowledgeError::Cycle { .. } | KnowledgeError::Validation(_) => StatusCode::BAD_REQUEST,
        KnowledgeError::VersionConflict { .. } => StatusCode::CONFLICT,
        KnowledgeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::message(error.message()))).into_response()
}
