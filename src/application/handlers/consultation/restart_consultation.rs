//! RestartConsultationHandler - clears a consultation's history.

use std::sync::Arc;

use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::{ConsultationId, DomainError};
use crate::ports::ConsultationRepository;

use super::view::ConsultationView;

/// Command to restart a consultation from its first question.
#[derive(Debug, Clone)]
pub struct RestartConsultationCommand {
    pub session_id: String,
}

/// Handler for restarting consultations.
///
/// Restart clears the history but keeps the snapshot the consultation was
/// started against; picking up rule edits requires a fresh start.
pub struct RestartConsultationHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl RestartConsultationHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RestartConsultationCommand,
    ) -> Result<ConsultationView, ConsultationError> {
        let id = ConsultationId::new(cmd.session_id).map_err(DomainError::from)?;

        let mut consultation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ConsultationError::not_found(id))?;

        consultation.restart();
        self.repository.save(&consultation).await?;

        tracing::info!(session_id = %consultation.id(), "consultation restarted");
        Ok(ConsultationView::assemble(&consultation))
    }
}
