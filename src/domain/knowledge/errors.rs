//! Knowledge-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SnapshotVersion};

/// Errors raised by rule-base authoring operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    /// A rule with the same action already exists.
    DuplicateAction(String),
    /// No rule with the given action exists.
    RuleNotFound(String),
    /// No visa type with the given code exists.
    VisaTypeNotFound(String),
    /// A visa type with the same code already exists.
    DuplicateVisaType(String),
    /// The dependency graph contains a cycle.
    Cycle { rule_refs: Vec<String> },
    /// The snapshot changed underneath an edit (lost the publish race).
    VersionConflict {
        expected: SnapshotVersion,
        actual: SnapshotVersion,
    },
    /// Input shape was invalid.
    Validation(String),
    /// Infrastructure failure.
    Storage(String),
}

impl KnowledgeError {
    pub fn duplicate_action(action: impl Into<String>) -> Self {
        KnowledgeError::DuplicateAction(action.into())
    }

    pub fn rule_not_found(action: impl Into<String>) -> Self {
        KnowledgeError::RuleNotFound(action.into())
    }

    pub fn cycle(rule_refs: Vec<String>) -> Self {
        KnowledgeError::Cycle { rule_refs }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            KnowledgeError::DuplicateAction(_) => ErrorCode::DuplicateAction,
            KnowledgeError::RuleNotFound(_) => ErrorCode::RuleNotFound,
            KnowledgeError::VisaTypeNotFound(_) => ErrorCode::VisaTypeNotFound,
            KnowledgeError::DuplicateVisaType(_) => ErrorCode::DuplicateVisaType,
            KnowledgeError::Cycle { .. } => ErrorCode::CyclicDependency,
            KnowledgeError::VersionConflict { .. } => ErrorCode::VersionConflict,
            KnowledgeError::Validation(_) => ErrorCode::ValidationFailed,
            KnowledgeError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            KnowledgeError::DuplicateAction(action) => {
                format!("A rule with action '{}' already exists", action)
            }
            KnowledgeError::RuleNotFound(action) => {
                format!("No rule with action '{}'", action)
            }
            KnowledgeError::VisaTypeNotFound(code) => {
                format!("No visa type with code '{}'", code)
            }
            KnowledgeError::DuplicateVisaType(code) => {
                format!("A visa type with code '{}' already exists", code)
            }
            KnowledgeError::Cycle { rule_refs } => {
                format!("Rules form a dependency cycle: {}", rule_refs.join(" -> "))
            }
            KnowledgeError::VersionConflict { expected, actual } => format!(
                "Snapshot changed underneath the edit (expected {}, found {})",
                expected, actual
            ),
            KnowledgeError::Validation(msg) => msg.clone(),
            KnowledgeError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for KnowledgeError {}

impl From<DomainError> for KnowledgeError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => KnowledgeError::Validation(err.to_string()),
            _ => KnowledgeError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_joins_refs() {
        let err = KnowledgeError::cycle(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.message(), "Rules form a dependency cycle: a -> b");
        assert_eq!(err.code(), ErrorCode::CyclicDependency);
    }

    #[test]
    fn duplicate_action_maps_to_conflict_code() {
        let err = KnowledgeError::duplicate_action("eligible_e");
        assert_eq!(err.code(), ErrorCode::DuplicateAction);
        assert!(err.message().contains("eligible_e"));
    }

    #[test]
    fn version_conflict_names_both_versions() {
        let err = KnowledgeError::VersionConflict {
            expected: SnapshotVersion::initial(),
            actual: SnapshotVersion::initial().next(),
        };
        assert!(err.message().contains("v1"));
        assert!(err.message().contains("v2"));
    }
}
