//! CreateRuleHandler - adds a rule to the rule base.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CombineMode, SnapshotVersion};
use crate::domain::knowledge::{validate, Condition, Issue, KnowledgeError, Rule};
use crate::ports::{RuleStore, VisaTypeDirectory};

/// The authorable fields of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDraft {
    pub visa_type: String,
    pub name: String,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub combine_mode: CombineMode,
    pub action: String,
}

impl RuleDraft {
    /// Builds the domain rule, validating the draft's shape.
    pub fn into_rule(self) -> Result<Rule, KnowledgeError> {
        Rule::new(
            self.visa_type,
            self.name,
            self.conditions,
            self.combine_mode,
            self.action,
        )
        .map_err(KnowledgeError::from)
    }
}

/// Command to create a rule.
#[derive(Debug, Clone)]
pub struct CreateRuleCommand {
    pub draft: RuleDraft,
    /// Position to insert at, clamped; `None` appends.
    pub insert_at: Option<usize>,
}

/// Outcome of a successful save: the published version plus whatever the
/// validator now has to say. Warnings never block a save; they ride along
/// so the author can fix them at leisure.
#[derive(Debug, Clone)]
pub struct SaveResult {
    pub version: SnapshotVersion,
    pub issues: Vec<Issue>,
}

/// Handler for creating rules.
pub struct CreateRuleHandler {
    rule_store: Arc<dyn RuleStore>,
    directory: Arc<dyn VisaTypeDirectory>,
}

impl CreateRuleHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>, directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self {
            rule_store,
            directory,
        }
    }

    pub async fn handle(&self, cmd: CreateRuleCommand) -> Result<SaveResult, KnowledgeError> {
        let rule = cmd.draft.into_rule()?;
        let action = rule.action().to_string();

        let base = self.rule_store.current().await?;
        let next = base.with_rule_created(rule, cmd.insert_at)?;
        let published = self.rule_store.publish(base.version(), next).await?;

        let visa_types = self.directory.all().await?;
        let report = validate(&published, &visa_types);

        tracing::info!(action = %action, version = %published.version(), "rule created");
        Ok(SaveResult {
            version: published.version(),
            issues: report.issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::{InMemoryRuleStore, InMemoryVisaTypeDirectory};
    use crate::domain::knowledge::{Severity, VisaType};
    use crate::ports::RuleStore as _;

    fn draft(action: &str) -> RuleDraft {
        RuleDraft {
            visa_type: "E".to_string(),
            name: action.to_string(),
            conditions: vec![Condition::requires("capital_invested").with_question("Invested?")],
            combine_mode: CombineMode::And,
            action: action.to_string(),
        }
    }

    fn handler() -> (CreateRuleHandler, Arc<InMemoryRuleStore>) {
        let store = Arc::new(InMemoryRuleStore::empty());
        let directory = Arc::new(InMemoryVisaTypeDirectory::new(vec![VisaType::new(
            "E", "Treaty",
        )
        .unwrap()]));
        (CreateRuleHandler::new(store.clone(), directory), store)
    }

    #[tokio::test]
    async fn create_publishes_a_new_version() {
        let (handler, store) = handler();
        let result = handler
            .handle(CreateRuleCommand {
                draft: draft("eligible_e"),
                insert_at: None,
            })
            .await
            .unwrap();

        assert_eq!(result.version, SnapshotVersion::initial().next());
        assert!(result.issues.is_empty());
        let current = store.current().await.unwrap();
        assert!(current.find("eligible_e").is_some());
    }

    #[tokio::test]
    async fn duplicate_action_conflicts_and_leaves_store_unchanged() {
        let (handler, store) = handler();
        handler
            .handle(CreateRuleCommand {
                draft: draft("eligible_e"),
                insert_at: None,
            })
            .await
            .unwrap();

        let result = handler
            .handle(CreateRuleCommand {
                draft: draft("eligible_e"),
                insert_at: None,
            })
            .await;
        assert!(matches!(result, Err(KnowledgeError::DuplicateAction(_))));

        let current = store.current().await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current.version(), SnapshotVersion::initial().next());
    }

    #[tokio::test]
    async fn save_with_dangling_reference_succeeds_with_warning() {
        let (handler, store) = handler();
        let mut dangling = draft("eligible_e");
        dangling.conditions = vec![Condition::requires("never_defined")];

        let result = handler
            .handle(CreateRuleCommand {
                draft: dangling,
                insert_at: None,
            })
            .await
            .unwrap();

        assert!(result
            .issues
            .iter()
            .any(|i| i.severity == Severity::Warning && i.message.contains("never_defined")));
        // the rule was saved regardless
        assert!(store.current().await.unwrap().find("eligible_e").is_some());
    }

    #[tokio::test]
    async fn empty_action_fails_validation() {
        let (handler, _) = handler();
        let mut invalid = draft("ok");
        invalid.action = " ".to_string();
        let result = handler
            .handle(CreateRuleCommand {
                draft: invalid,
                insert_at: None,
            })
            .await;
        assert!(matches!(result, Err(KnowledgeError::Validation(_))));
    }

    #[tokio::test]
    async fn insert_at_places_the_rule() {
        let (handler, store) = handler();
        handler
            .handle(CreateRuleCommand {
                draft: draft("first"),
                insert_at: None,
            })
            .await
            .unwrap();
        handler
            .handle(CreateRuleCommand {
                draft: draft("second"),
                insert_at: Some(0),
            })
            .await
            .unwrap();

        let current = store.current().await.unwrap();
        assert_eq!(current.position("second"), Some(0));
        assert_eq!(current.position("first"), Some(1));
    }
}
