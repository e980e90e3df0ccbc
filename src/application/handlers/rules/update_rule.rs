//! UpdateRuleHandler - replaces an existing rule.

use std::sync::Arc;

use crate::domain::knowledge::{validate, KnowledgeError};
use crate::ports::{RuleStore, VisaTypeDirectory};

use super::create_rule::{RuleDraft, SaveResult};

/// Command to replace the rule stored under `action`.
///
/// The draft may rename the action as long as the new key does not collide.
#[derive(Debug, Clone)]
pub struct UpdateRuleCommand {
    pub action: String,
    pub draft: RuleDraft,
}

/// Handler for updating rules.
pub struct UpdateRuleHandler {
    rule_store: Arc<dyn RuleStore>,
    directory: Arc<dyn VisaTypeDirectory>,
}

impl UpdateRuleHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>, directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self {
            rule_store,
            directory,
        }
    }

    pub async fn handle(&self, cmd: UpdateRuleCommand) -> Result<SaveResult, KnowledgeError> {
        let replacement = cmd.draft.into_rule()?;

        let base = self.rule_store.current().await?;
        let next = base.with_rule_updated(&cmd.action, replacement)?;
        let published = self.rule_store.publish(base.version(), next).await?;

        let visa_types = self.directory.all().await?;
        let report = validate(&published, &visa_types);

        tracing::info!(action = %cmd.action, version = %published.version(), "rule updated");
        Ok(SaveResult {
            version: published.version(),
            issues: report.issues,
        })
    }
}
