//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own router with `dto` / `handlers` / `routes`
//! files; `api_router` assembles them under `/api`.

pub mod consultation;
pub mod error;
pub mod rules;
pub mod visa_types;

use axum::{routing::get, Json, Router};

pub use consultation::{consultation_routes, ConsultationHandlers};
pub use error::{ErrorDetail, ErrorResponse};
pub use rules::{rules_routes, RuleAdminHandlers};
pub use visa_types::{visa_type_routes, VisaTypeState};

/// Assembles the full API router.
pub fn api_router(
    consultation: ConsultationHandlers,
    rules: RuleAdminHandlers,
    visa_types: VisaTypeState,
) -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .route("/health", get(health))
            .nest("/consultation", consultation_routes(consultation))
            .merge(rules_routes(rules))
            .nest("/visa-types", visa_type_routes(visa_types)),
    )
}

/// GET /api/health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}
