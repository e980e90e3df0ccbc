//! AutoOrganizeHandler - reorders rules via the dependency graph.

use std::sync::Arc;

use crate::domain::foundation::SnapshotVersion;
use crate::domain::knowledge::{reorder, KnowledgeError, OrganizeMode};
use crate::ports::RuleStore;

/// Command to auto-organize the rule base.
#[derive(Debug, Clone)]
pub struct AutoOrganizeCommand {
    pub mode: OrganizeMode,
}

/// The published order after organizing.
#[derive(Debug, Clone)]
pub struct OrganizeResult {
    pub version: SnapshotVersion,
    pub order: Vec<String>,
}

/// Handler for dependency-order reorganization.
pub struct AutoOrganizeHandler {
    rule_store: Arc<dyn RuleStore>,
}

impl AutoOrganizeHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>) -> Self {
        Self { rule_store }
    }

    pub async fn handle(
        &self,
        cmd: AutoOrganizeCommand,
    ) -> Result<OrganizeResult, KnowledgeError> {
        let base = self.rule_store.current().await?;

        // A cyclic base refuses to organize; nothing is published.
        let next = reorder(&base, cmd.mode)?;
        let published = self.rule_store.publish(base.version(), next).await?;

        let order = published
            .rules()
            .iter()
            .map(|r| r.action().to_string())
            .collect();

        tracing::info!(mode = %cmd.mode, version = %published.version(), "rules auto-organized");
        Ok(OrganizeResult {
            version: published.version(),
            order,
        })
    }
}
