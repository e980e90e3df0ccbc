//! HTTP handlers for visa type directory endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::adapters::http::error::knowledge_error_response;
use crate::application::handlers::visa_types::VisaTypeHandlers;
use crate::domain::knowledge::{KnowledgeError, VisaType};

/// Shared state for the visa type routes.
#[derive(Clone)]
pub struct VisaTypeState {
    handlers: Arc<VisaTypeHandlers>,
}

impl VisaTypeState {
    pub fn new(handlers: Arc<VisaTypeHandlers>) -> Self {
        Self { handlers }
    }
}

/// Request body for creating or replacing a visa type.
#[derive(Debug, Clone, Deserialize)]
pub struct VisaTypeRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

impl VisaTypeRequest {
    fn into_visa_type(self) -> Result<VisaType, KnowledgeError> {
        let mut visa_type = VisaType::new(self.code, self.name)
            .map_err(KnowledgeError::from)?
            .with_display_order(self.display_order);
        visa_type.description = self.description;
        Ok(visa_type)
    }
}

/// GET /api/visa-types - List visa types
pub async fn list_visa_types(State(state): State<VisaTypeState>) -> Response {
    match state.handlers.list().await {
        Ok(visa_types) => (
            StatusCode::OK,
            Json(serde_json::json!({"visa_types": visa_types})),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// POST /api/visa-types - Create a visa type
pub async fn create_visa_type(
    State(state): State<VisaTypeState>,
    Json(req): Json<VisaTypeRequest>,
) -> Response {
    let code = req.code.clone();
    let visa_type = match req.into_visa_type() {
        Ok(v) => v,
        Err(e) => return knowledge_error_response(e),
    };
    match state.handlers.create(visa_type).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({"status": "created", "code": code})),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// PUT /api/visa-types/:code - Replace a visa type
pub async fn update_visa_type(
    State(state): State<VisaTypeState>,
    Path(code): Path<String>,
    Json(req): Json<VisaTypeRequest>,
) -> Response {
    let visa_type = match req.into_visa_type() {
        Ok(v) => v,
        Err(e) => return knowledge_error_response(e),
    };
    match state.handlers.update(&code, visa_type).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"status": "updated", "code": code})),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// DELETE /api/visa-types/:code - Remove a visa type
pub async fn delete_visa_type(
    State(state): State<VisaTypeState>,
    Path(code): Path<String>,
) -> Response {
    match state.handlers.delete(&code).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"status": "deleted", "code": code})),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}
