//! ValidateRulesHandler - runs the structural checks on demand.

use std::sync::Arc;

use crate::domain::knowledge::{validate, KnowledgeError, ValidationReport};
use crate::ports::{RuleStore, VisaTypeDirectory};

/// Query to validate the current rule base.
#[derive(Debug, Clone, Default)]
pub struct ValidateRulesQuery {
    /// Restrict the report to issues touching this visa type.
    pub visa_type: Option<String>,
}

/// Handler for on-demand validation.
pub struct ValidateRulesHandler {
    rule_store: Arc<dyn RuleStore>,
    directory: Arc<dyn VisaTypeDirectory>,
}

impl ValidateRulesHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>, directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self {
            rule_store,
            directory,
        }
    }

    pub async fn handle(
        &self,
        query: ValidateRulesQuery,
    ) -> Result<ValidationReport, KnowledgeError> {
        let snapshot = self.rule_store.current().await?;
        let mut visa_types = self.directory.all().await?;

        // Checks always run over the whole snapshot - cycles do not respect
        // visa type boundaries - but the reported issues are narrowed to the
        // requested visa type afterwards.
        if let Some(code) = &query.visa_type {
            visa_types.retain(|v| &v.code == code);
        }
        let mut report = validate(&snapshot, &visa_types);

        if let Some(code) = &query.visa_type {
            report.issues.retain(|issue| {
                issue.rule_refs.is_empty()
                    || issue.rule_refs.iter().any(|action| {
                        snapshot
                            .find(action)
                            .map_or(false, |r| r.visa_type() == code.as_str())
                    })
            });
        }

        Ok(report)
    }
}
