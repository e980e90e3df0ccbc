//! ReorderRulesHandler - applies an explicit rule order.

use std::sync::Arc;

use crate::domain::foundation::SnapshotVersion;
use crate::domain::knowledge::KnowledgeError;
use crate::ports::RuleStore;

/// Command to reorder rules to the given action list.
///
/// Unlisted rules keep their relative order after the listed ones; unknown
/// actions are ignored.
#[derive(Debug, Clone)]
pub struct ReorderRulesCommand {
    pub actions: Vec<String>,
}

/// Handler for explicit reordering.
pub struct ReorderRulesHandler {
    rule_store: Arc<dyn RuleStore>,
}

impl ReorderRulesHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>) -> Self {
        Self { rule_store }
    }

    pub async fn handle(
        &self,
        cmd: ReorderRulesCommand,
    ) -> Result<SnapshotVersion, KnowledgeError> {
        let base = self.rule_store.current().await?;
        let next = base.with_order(&cmd.actions);
        let published = self.rule_store.publish(base.version(), next).await?;

        tracing::info!(version = %published.version(), "rules reordered");
        Ok(published.version())
    }
}
