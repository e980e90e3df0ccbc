//! In-memory consultation repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::consultation::Consultation;
use crate::domain::foundation::{ConsultationId, DomainError};
use crate::ports::ConsultationRepository;

/// In-memory implementation of [`ConsultationRepository`].
///
/// A single map lock serializes all mutations, which trivially satisfies the
/// per-consultation single-writer requirement; distinct consultations only
/// contend on the brief map access itself.
#[derive(Debug, Default)]
pub struct InMemoryConsultationStore {
    consultations: RwLock<HashMap<ConsultationId, Consultation>>,
}

impl InMemoryConsultationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored consultations (for tests).
    pub async fn len(&self) -> usize {
        self.consultations.read().await.len()
    }

    /// Returns true when no consultations are stored.
    pub async fn is_empty(&self) -> bool {
        self.consultations.read().await.is_empty()
    }
}

#[async_trait]
impl ConsultationRepository for InMemoryConsultationStore {
    async fn save(&self, consultation: &Consultation) -> Result<(), DomainError> {
        let mut consultations = self.consultations.write().await;
        consultations.insert(consultation.id().clone(), consultation.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ConsultationId,
    ) -> Result<Option<Consultation>, DomainError> {
        let consultations = self.consultations.read().await;
        Ok(consultations.get(id).cloned())
    }

    async fn delete(&self, id: &ConsultationId) -> Result<(), DomainError> {
        let mut consultations = self.consultations.write().await;
        consultations.remove(id);
        Ok(())
    }
}
