//! DeleteRuleHandler - removes a rule from the rule base.

use std::sync::Arc;

use crate::domain::knowledge::{validate, KnowledgeError};
use crate::ports::{RuleStore, VisaTypeDirectory};

use super::create_rule::SaveResult;

/// Command to delete the rule stored under `action`.
#[derive(Debug, Clone)]
pub struct DeleteRuleCommand {
    pub action: String,
}

/// Handler for deleting rules.
pub struct DeleteRuleHandler {
    rule_store: Arc<dyn RuleStore>,
    directory: Arc<dyn VisaTypeDirectory>,
}

impl DeleteRuleHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>, directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self {
            rule_store,
            directory,
        }
    }

    pub async fn handle(&self, cmd: DeleteRuleCommand) -> Result<SaveResult, KnowledgeError> {
        let base = self.rule_store.current().await?;
        let next = base.with_rule_deleted(&cmd.action)?;
        let published = self.rule_store.publish(base.version(), next).await?;

        let visa_types = self.directory.all().await?;
        let report = validate(&published, &visa_types);

        tracing::info!(action = %cmd.action, version = %published.version(), "rule deleted");
        Ok(SaveResult {
            version: published.version(),
            issues: report.issues,
        })
    }
}
