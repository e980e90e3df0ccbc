//! GetConsultationStateHandler - reads a consultation without mutating it.

use std::sync::Arc;

use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::{ConsultationId, DomainError};
use crate::ports::ConsultationRepository;

use super::view::ConsultationView;

/// Query for a consultation's current state.
#[derive(Debug, Clone)]
pub struct GetConsultationStateQuery {
    pub session_id: String,
}

/// Handler for reading consultation state.
pub struct GetConsultationStateHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl GetConsultationStateHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetConsultationStateQuery,
    ) -> Result<ConsultationView, ConsultationError> {
        let id = ConsultationId::new(query.session_id).map_err(DomainError::from)?;

        let consultation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ConsultationError::not_found(id))?;

        Ok(ConsultationView::assemble(&consultation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::{InMemoryConsultationStore, InMemoryRuleStore};
    use crate::application::handlers::consultation::{
        AnswerQuestionCommand, AnswerQuestionHandler, StartConsultationCommand,
        StartConsultationHandler,
    };
    use crate::domain::foundation::{CombineMode, FactValue, SnapshotVersion};
    use crate::domain::knowledge::{Condition, Rule, RuleSnapshot};

    fn snapshot() -> RuleSnapshot {
        RuleSnapshot::new(
            SnapshotVersion::initial(),
            vec![Rule::new(
                "H-1B",
                "Specialty occupation",
                vec![Condition::requires("has_job_offer").with_question("Job offer?")],
                CombineMode::And,
                "eligible_h1b",
            )
            .unwrap()],
        )
    }

    async fn setup() -> (GetConsultationStateHandler, AnswerQuestionHandler) {
        let repository = Arc::new(InMemoryConsultationStore::new());
        StartConsultationHandler::new(
            Arc::new(InMemoryRuleStore::new(snapshot())),
            repository.clone(),
        )
        .handle(StartConsultationCommand {
            session_id: Some("s1".to_string()),
        })
        .await
        .unwrap();
        (
            GetConsultationStateHandler::new(repository.clone()),
            AnswerQuestionHandler::new(repository),
        )
    }

    #[tokio::test]
    async fn returns_current_state_without_mutation() {
        let (state, _) = setup().await;
        let query = GetConsultationStateQuery {
            session_id: "s1".to_string(),
        };
        let first = state.handle(query.clone()).await.unwrap();
        let second = state.handle(query).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.answered_questions.len(), 0);
    }

    #[tokio::test]
    async fn includes_diagnosis_when_complete() {
        let (state, answer) = setup().await;
        answer
            .handle(AnswerQuestionCommand {
                session_id: "s1".to_string(),
                answer: FactValue::True,
            })
            .await
            .unwrap();

        let view = state
            .handle(GetConsultationStateQuery {
                session_id: "s1".to_string(),
            })
            .await
            .unwrap();
        assert!(view.is_complete);
        assert_eq!(view.diagnosis.unwrap(), vec!["H-1B".to_string()]);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (state, _) = setup().await;
        let result = state
            .handle(GetConsultationStateQuery {
                session_id: "missing".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ConsultationError::NotFound(_))));
    }
}
