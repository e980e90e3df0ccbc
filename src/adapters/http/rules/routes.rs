//! HTTP routes for rule authoring endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    auto_organize, create_rule, delete_rule, list_rules, reorder_rules, update_rule,
    validate_rules, RuleAdminHandlers,
};

/// Creates the rule authoring router.
///
/// Kept un-nested so both `/rules` and `/validation/check` can live under
/// the same `/api` prefix.
pub fn rules_routes(handlers: RuleAdminHandlers) -> Router {
    Router::new()
        .route("/rules", get(list_rules))
        .route("/rules", post(create_rule))
        .route("/rules/reorder", post(reorder_rules))
        .route("/rules/organize", post(auto_organize))
        .route("/rules/:action", put(update_rule))
        .route("/rules/:action", delete(delete_rule))
        .route("/validation/check", get(validate_rules))
        .with_state(handlers)
}
