//! HTTP routes for consultation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    answer_question, get_state, restart_consultation, start_consultation, step_back,
    ConsultationHandlers,
};

/// Creates the consultation router with all endpoints.
pub fn consultation_routes(handlers: ConsultationHandlers) -> Router {
    Router::new()
        .route("/start", post(start_consultation))
        .route("/answer", post(answer_question))
        .route("/back", post(step_back))
        .route("/restart", post(restart_consultation))
        .route("/state/:session_id", get(get_state))
        .with_state(handlers)
}
