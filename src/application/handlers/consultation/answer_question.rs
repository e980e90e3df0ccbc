//! AnswerQuestionHandler - records an answer and advances the dialogue.

use std::sync::Arc;

use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::{ConsultationId, DomainError, FactValue};
use crate::ports::ConsultationRepository;

use super::view::ConsultationView;

/// Command to answer the current question of a consultation.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub session_id: String,
    pub answer: FactValue,
}

/// Handler for answering questions.
pub struct AnswerQuestionHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl AnswerQuestionHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AnswerQuestionCommand,
    ) -> Result<ConsultationView, ConsultationError> {
        let id = ConsultationId::new(cmd.session_id).map_err(DomainError::from)?;

        let mut consultation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ConsultationError::not_found(id))?;

        // Answers after completion are ignored, not an error.
        if consultation.answer(cmd.answer) {
            self.repository.save(&consultation).await?;
            tracing::debug!(
                session_id = %consultation.id(),
                answers = consultation.history_len(),
                complete = consultation.is_complete(),
                "answer recorded"
            );
        }

        Ok(ConsultationView::assemble(&consultation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::{InMemoryConsultationStore, InMemoryRuleStore};
    use crate::application::handlers::consultation::{
        StartConsultationCommand, StartConsultationHandler,
    };
    use crate::domain::foundation::{CombineMode, SnapshotVersion};
    use crate::domain::knowledge::{Condition, Rule, RuleSnapshot};

    fn snapshot() -> RuleSnapshot {
        RuleSnapshot::new(
            SnapshotVersion::initial(),
            vec![Rule::new(
                "H-1B",
                "Specialty occupation",
                vec![
                    Condition::requires("has_job_offer").with_question("Job offer?"),
                    Condition::requires("has_degree").with_question("Degree?"),
                ],
                CombineMode::And,
                "eligible_h1b",
            )
            .unwrap()],
        )
    }

    async fn started() -> (AnswerQuestionHandler, Arc<InMemoryConsultationStore>) {
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
        (AnswerQuestionHandler::new(repository.clone()), repository)
    }

    fn cmd(answer: FactValue) -> AnswerQuestionCommand {
        AnswerQuestionCommand {
            session_id: "s1".to_string(),
            answer,
        }
    }

    #[tokio::test]
    async fn answer_advances_to_the_next_question() {
        let (handler, _) = started().await;
        let view = handler.handle(cmd(FactValue::True)).await.unwrap();
        assert_eq!(view.current_question.unwrap().fact, "has_degree");
        assert_eq!(view.answered_questions.len(), 1);
    }

    #[tokio::test]
    async fn final_answer_completes_with_diagnosis() {
        let (handler, _) = started().await;
        handler.handle(cmd(FactValue::True)).await.unwrap();
        let view = handler.handle(cmd(FactValue::True)).await.unwrap();
        assert!(view.is_complete);
        assert_eq!(view.diagnosis.unwrap(), vec!["H-1B".to_string()]);
        assert_eq!(view.derived_facts, vec!["eligible_h1b".to_string()]);
    }

    #[tokio::test]
    async fn answer_after_completion_is_ignored() {
        let (handler, _) = started().await;
        handler.handle(cmd(FactValue::True)).await.unwrap();
        handler.handle(cmd(FactValue::True)).await.unwrap();
        let view = handler.handle(cmd(FactValue::False)).await.unwrap();
        assert!(view.is_complete);
        assert_eq!(view.answered_questions.len(), 2);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (handler, _) = started().await;
        let result = handler
            .handle(AnswerQuestionCommand {
                session_id: "missing".to_string(),
                answer: FactValue::True,
            })
            .await;
        assert!(matches!(result, Err(ConsultationError::NotFound(_))));
    }
}
