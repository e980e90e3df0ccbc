//! Consultation handlers.

mod answer_question;
mod get_consultation_state;
mod restart_consultation;
mod start_consultation;
mod step_back;
mod view;

pub use answer_question::{AnswerQuestionCommand, AnswerQuestionHandler};
pub use get_consultation_state::{GetConsultationStateHandler, GetConsultationStateQuery};
pub use restart_consultation::{RestartConsultationCommand, RestartConsultationHandler};
pub use start_consultation::{StartConsultationCommand, StartConsultationHandler};
pub use step_back::{StepBackCommand, StepBackHandler};
pub use view::{ConditionState, ConditionView, ConsultationView, RuleView};
