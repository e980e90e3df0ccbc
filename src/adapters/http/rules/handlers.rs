//! HTTP handlers for rule authoring endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::knowledge_error_response;
use crate::application::handlers::rules::{
    AutoOrganizeCommand, AutoOrganizeHandler, CreateRuleCommand, CreateRuleHandler,
    DeleteRuleCommand, DeleteRuleHandler, ListRulesHandler, ListRulesQuery, ReorderRulesCommand,
    ReorderRulesHandler, UpdateRuleCommand, UpdateRuleHandler, ValidateRulesHandler,
    ValidateRulesQuery,
};

use super::dto::{
    CreateRuleRequest, ListRulesParams, OrganizeRequest, ReorderRequest, RuleDto, SaveResponse,
    UpdateRuleRequest, ValidateParams, ValidationResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RuleAdminHandlers {
    list_handler: Arc<ListRulesHandler>,
    create_handler: Arc<CreateRuleHandler>,
    update_handler: Arc<UpdateRuleHandler>,
    delete_handler: Arc<DeleteRuleHandler>,
    reorder_handler: Arc<ReorderRulesHandler>,
    organize_handler: Arc<AutoOrganizeHandler>,
    validate_handler: Arc<ValidateRulesHandler>,
}

impl RuleAdminHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        list_handler: Arc<ListRulesHandler>,
        create_handler: Arc<CreateRuleHandler>,
        update_handler: Arc<UpdateRuleHandler>,
        delete_handler: Arc<DeleteRuleHandler>,
        reorder_handler: Arc<ReorderRulesHandler>,
        organize_handler: Arc<AutoOrganizeHandler>,
        validate_handler: Arc<ValidateRulesHandler>,
    ) -> Self {
        Self {
            list_handler,
            create_handler,
            update_handler,
            delete_handler,
            reorder_handler,
            organize_handler,
            validate_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/rules - List rules
pub async fn list_rules(
    State(handlers): State<RuleAdminHandlers>,
    Query(params): Query<ListRulesParams>,
) -> Response {
    let query = ListRulesQuery {
        visa_type: params.visa_type,
        sort: params.sort,
    };
    match handlers.list_handler.handle(query).await {
        Ok(result) => {
            let rules: Vec<RuleDto> = result.rules.iter().map(RuleDto::from).collect();
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "version": result.version,
                    "rules": rules,
                })),
            )
                .into_response()
        }
        Err(e) => knowledge_error_response(e),
    }
}

/// POST /api/rules - Create a rule
pub async fn create_rule(
    State(handlers): State<RuleAdminHandlers>,
    Json(req): Json<CreateRuleRequest>,
) -> Response {
    let (draft, insert_at) = req.into_draft();
    let cmd = CreateRuleCommand { draft, insert_at };
    match handlers.create_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(SaveResponse::from_result("created", result)),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// PUT /api/rules/:action - Update a rule
pub async fn update_rule(
    State(handlers): State<RuleAdminHandlers>,
    Path(action): Path<String>,
    Json(req): Json<UpdateRuleRequest>,
) -> Response {
    let cmd = UpdateRuleCommand {
        action,
        draft: req.into_draft(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SaveResponse::from_result("updated", result)),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// DELETE /api/rules/:action - Delete a rule
pub async fn delete_rule(
    State(handlers): State<RuleAdminHandlers>,
    Path(action): Path<String>,
) -> Response {
    let cmd = DeleteRuleCommand { action };
    match handlers.delete_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SaveResponse::from_result("deleted", result)),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// POST /api/rules/reorder - Apply an explicit order
pub async fn reorder_rules(
    State(handlers): State<RuleAdminHandlers>,
    Json(req): Json<ReorderRequest>,
) -> Response {
    let cmd = ReorderRulesCommand {
        actions: req.actions,
    };
    match handlers.reorder_handler.handle(cmd).await {
        Ok(version) => (
            StatusCode::OK,
            Json(serde_json::json!({"status": "reordered", "version": version})),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// POST /api/rules/organize - Auto-organize by dependency
pub async fn auto_organize(
    State(handlers): State<RuleAdminHandlers>,
    Json(req): Json<OrganizeRequest>,
) -> Response {
    let cmd = AutoOrganizeCommand { mode: req.mode };
    match handlers.organize_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "organized",
                "version": result.version,
                "order": result.order,
            })),
        )
            .into_response(),
        Err(e) => knowledge_error_response(e),
    }
}

/// GET /api/validation/check - Run the structural checks
pub async fn validate_rules(
    State(handlers): State<RuleAdminHandlers>,
    Query(params): Query<ValidateParams>,
) -> Response {
    let query = ValidateRulesQuery {
        visa_type: params.visa_type,
    };
    match handlers.validate_handler.handle(query).await {
        Ok(report) => {
            let response: ValidationResponse = report.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => knowledge_error_response(e),
    }
}
