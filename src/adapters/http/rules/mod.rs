//! HTTP adapter for rule authoring endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateRuleRequest, IssueDto, ListRulesParams, OrganizeRequest, ReorderRequest, RuleDto,
    SaveResponse, UpdateRuleRequest, ValidateParams, ValidationResponse,
};
pub use handlers::RuleAdminHandlers;
pub use routes::rules_routes;
