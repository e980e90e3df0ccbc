//! Rule authoring handlers.

mod auto_organize;
mod create_rule;
mod delete_rule;
mod list_rules;
mod reorder_rules;
mod update_rule;
mod validate_rules;

pub use auto_organize::{AutoOrganizeCommand, AutoOrganizeHandler, OrganizeResult};
pub use create_rule::{CreateRuleCommand, CreateRuleHandler, RuleDraft, SaveResult};
pub use delete_rule::{DeleteRuleCommand, DeleteRuleHandler};
pub use list_rules::{ListRulesHandler, ListRulesQuery, ListRulesResult, RuleSort};
pub use reorder_rules::{ReorderRulesCommand, ReorderRulesHandler};
pub use update_rule::{UpdateRuleCommand, UpdateRuleHandler};
pub use validate_rules::{ValidateRulesHandler, ValidateRulesQuery};
