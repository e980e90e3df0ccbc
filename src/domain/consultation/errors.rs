//! Consultation-specific error types.

use crate::domain::foundation::{ConsultationId, DomainError, ErrorCode};
use crate::domain::knowledge::Issue;

/// Errors raised by consultation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsultationError {
    /// No consultation with the given id exists.
    NotFound(ConsultationId),
    /// The active snapshot has error-severity issues; consultations must
    /// never start against a known-bad rule base.
    SnapshotInvalid { issues: Vec<Issue> },
    /// Input shape was invalid.
    ValidationFailed { field: String, message: String },
    /// Infrastructure failure.
    Infrastructure(String),
}

impl ConsultationError {
    pub fn not_found(id: ConsultationId) -> Self {
        ConsultationError::NotFound(id)
    }

    pub fn snapshot_invalid(issues: Vec<Issue>) -> Self {
        ConsultationError::SnapshotInvalid { issues }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsultationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConsultationError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConsultationError::NotFound(_) => ErrorCode::ConsultationNotFound,
            ConsultationError::SnapshotInvalid { .. } => ErrorCode::SnapshotInvalid,
            ConsultationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConsultationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConsultationError::NotFound(id) => format!("Consultation not found: {}", id),
            ConsultationError::SnapshotInvalid { issues } => {
                let summary: Vec<String> =
                    issues.iter().map(|i| i.message.clone()).collect();
                format!(
                    "The rule base has unresolved errors: {}",
                    summary.join("; ")
                )
            }
            ConsultationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ConsultationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConsultationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConsultationError {}

impl From<DomainError> for ConsultationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ConsultationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ConsultationError::Infrastructure(err.to_string()),
        }
    }
}
