//! StartConsultationHandler - begins a consultation against the current
//! rule base.

use std::sync::Arc;

use crate::domain::consultation::{Consultation, ConsultationError};
use crate::domain::foundation::{ConsultationId, DomainError};
use crate::domain::knowledge::validate;
use crate::ports::{ConsultationRepository, RuleStore};

use super::view::ConsultationView;

/// Command to start (or overwrite) a consultation.
///
/// A missing `session_id` gets a server-generated one; the response carries
/// it back so the client can address the session afterwards.
#[derive(Debug, Clone)]
pub struct StartConsultationCommand {
    pub session_id: Option<String>,
}

/// Handler for starting consultations.
pub struct StartConsultationHandler {
    rule_store: Arc<dyn RuleStore>,
    repository: Arc<dyn ConsultationRepository>,
}

impl StartConsultationHandler {
    pub fn new(
        rule_store: Arc<dyn RuleStore>,
        repository: Arc<dyn ConsultationRepository>,
    ) -> Self {
        Self {
            rule_store,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartConsultationCommand,
    ) -> Result<ConsultationView, ConsultationError> {
        let id = match cmd.session_id {
            Some(session_id) => ConsultationId::new(session_id).map_err(DomainError::from)?,
            None => ConsultationId::generate(),
        };

        // A consultation must never start against a known-bad rule base.
        let snapshot = self.rule_store.current().await?;
        let report = validate(&snapshot, &[]);
        if report.has_errors() {
            return Err(ConsultationError::snapshot_invalid(
                report.errors().into_iter().cloned().collect(),
            ));
        }

        let consultation = Consultation::start(id, snapshot);
        self.repository.save(&consultation).await?;

        tracing::info!(session_id = %consultation.id(), "consultation started");
        Ok(ConsultationView::assemble(&consultation))
    }
}
