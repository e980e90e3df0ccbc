//! Consultation repository port.

use async_trait::async_trait;

use crate::domain::consultation::Consultation;
use crate::domain::foundation::{ConsultationId, DomainError};

/// Repository port for consultation persistence.
///
/// Consultations are independent units keyed by id; implementations must
/// serialize operations touching the same id so history changes stay
/// linearizable.
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Saves a consultation, replacing any existing one under the same id.
    async fn save(&self, consultation: &Consultation) -> Result<(), DomainError>;

    /// Finds a consultation by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &ConsultationId,
    ) -> Result<Option<Consultation>, DomainError>;

    /// Deletes a consultation (primarily for tests).
    async fn delete(&self, id: &ConsultationId) -> Result<(), DomainError>;
}
