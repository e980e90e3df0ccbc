//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Visa Advisor domain.

mod combine_mode;
mod errors;
mod fact_value;
mod ids;
mod rule_status;
mod timestamp;

pub use combine_mode::CombineMode;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fact_value::FactValue;
pub use ids::{ConsultationId, SnapshotVersion};
pub use rule_status::RuleStatus;
pub use timestamp::Timestamp;
