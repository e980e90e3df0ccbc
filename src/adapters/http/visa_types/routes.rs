//! HTTP routes for visa type directory endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_visa_type, delete_visa_type, list_visa_types, update_visa_type, VisaTypeState,
};

/// Creates the visa type directory router.
pub fn visa_type_routes(state: VisaTypeState) -> Router {
    Router::new()
        .route("/", get(list_visa_types))
        .route("/", post(create_visa_type))
        .route("/:code", put(update_visa_type))
        .route("/:code", delete(delete_visa_type))
        .with_state(state)
}
