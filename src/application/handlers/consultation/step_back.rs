//! StepBackHandler - steps backward through the dialogue.

use std::sync::Arc;

use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::{ConsultationId, DomainError};
use crate::ports::ConsultationRepository;

use super::view::ConsultationView;

/// Command to drop the last answers of a consultation.
#[derive(Debug, Clone)]
pub struct StepBackCommand {
    pub session_id: String,
    pub steps: usize,
}

/// Handler for back-stepping.
pub struct StepBackHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl StepBackHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: StepBackCommand,
    ) -> Result<ConsultationView, ConsultationError> {
        let id = ConsultationId::new(cmd.session_id).map_err(DomainError::from)?;

        let mut consultation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ConsultationError::not_found(id))?;

        let dropped = consultation.step_back(cmd.steps);
        if dropped > 0 {
            self.repository.save(&consultation).await?;
        }

        tracing::debug!(
            session_id = %consultation.id(),
            dropped,
            remaining = consultation.history_len(),
            "stepped back"
        );
        Ok(ConsultationView::assemble(&consultation))
    }
}
