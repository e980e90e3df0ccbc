//! HTTP handlers for consultation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::consultation_error_response;
use crate::application::handlers::consultation::{
    AnswerQuestionCommand, AnswerQuestionHandler, GetConsultationStateHandler,
    GetConsultationStateQuery, RestartConsultationCommand, RestartConsultationHandler,
    StartConsultationCommand, StartConsultationHandler, StepBackCommand, StepBackHandler,
};

use super::dto::{
    AnswerRequest, AnswerResponse, BackRequest, BackResponse, SessionRequest, StartRequest,
    StartResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConsultationHandlers {
    start_handler: Arc<StartConsultationHandler>,
    answer_handler: Arc<AnswerQuestionHandler>,
    back_handler: Arc<StepBackHandler>,
    restart_handler: Arc<RestartConsultationHandler>,
    state_handler: Arc<GetConsultationStateHandler>,
}

impl ConsultationHandlers {
    pub fn new(
        start_handler: Arc<StartConsultationHandler>,
        answer_handler: Arc<AnswerQuestionHandler>,
        back_handler: Arc<StepBackHandler>,
        restart_handler: Arc<RestartConsultationHandler>,
        state_handler: Arc<GetConsultationStateHandler>,
    ) -> Self {
        Self {
            start_handler,
            answer_handler,
            back_handler,
            restart_handler,
            state_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/consultation/start - Begin a consultation
pub async fn start_consultation(
    State(handlers): State<ConsultationHandlers>,
    Json(req): Json<StartRequest>,
) -> Response {
    let cmd = StartConsultationCommand {
        session_id: req.session_id,
    };
    match handlers.start_handler.handle(cmd).await {
        Ok(view) => {
            let response: StartResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => consultation_error_response(e),
    }
}

/// POST /api/consultation/answer - Answer the current question
pub async fn answer_question(
    State(handlers): State<ConsultationHandlers>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let cmd = AnswerQuestionCommand {
        session_id: req.session_id,
        answer: req.answer.into(),
    };
    match handlers.answer_handler.handle(cmd).await {
        Ok(view) => {
            let response: AnswerResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => consultation_error_response(e),
    }
}

/// POST /api/consultation/back - Step backward through the dialogue
pub async fn step_back(
    State(handlers): State<ConsultationHandlers>,
    Json(req): Json<BackRequest>,
) -> Response {
    let cmd = StepBackCommand {
        session_id: req.session_id,
        steps: req.steps,
    };
    match handlers.back_handler.handle(cmd).await {
        Ok(view) => {
            let response: BackResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => consultation_error_response(e),
    }
}

/// POST /api/consultation/restart - Restart from the first question
pub async fn restart_consultation(
    State(handlers): State<ConsultationHandlers>,
    Json(req): Json<SessionRequest>,
) -> Response {
    let cmd = RestartConsultationCommand {
        session_id: req.session_id,
    };
    match handlers.restart_handler.handle(cmd).await {
        Ok(view) => {
            let response: StartResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => consultation_error_response(e),
    }
}

/// GET /api/consultation/state/:session_id - Full current state
pub async fn get_state(
    State(handlers): State<ConsultationHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let query = GetConsultationStateQuery { session_id };
    match handlers.state_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => consultation_error_response(e),
    }
}
