//! ListRulesHandler - reads the rule base.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SnapshotVersion;
use crate::domain::knowledge::{KnowledgeError, Rule};
use crate::ports::{RuleStore, VisaTypeDirectory};

/// Ordering of the returned rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleSort {
    /// Group by visa type in directory display order.
    #[default]
    VisaType,
    /// Snapshot (declared) order.
    None,
}

/// Query for the rule list.
#[derive(Debug, Clone, Default)]
pub struct ListRulesQuery {
    pub visa_type: Option<String>,
    pub sort: RuleSort,
}

/// The rule list pinned to one snapshot version.
#[derive(Debug, Clone)]
pub struct ListRulesResult {
    pub version: SnapshotVersion,
    pub rules: Vec<Rule>,
}

/// Handler for listing rules.
pub struct ListRulesHandler {
    rule_store: Arc<dyn RuleStore>,
    directory: Arc<dyn VisaTypeDirectory>,
}

impl ListRulesHandler {
    pub fn new(rule_store: Arc<dyn RuleStore>, directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self {
            rule_store,
            directory,
        }
    }

    pub async fn handle(&self, query: ListRulesQuery) -> Result<ListRulesResult, KnowledgeError> {
        let snapshot = self.rule_store.current().await?;

        let mut rules: Vec<Rule> = snapshot
            .rules()
            .iter()
            .filter(|r| {
                query
                    .visa_type
                    .as_deref()
                    .map_or(true, |vt| r.visa_type() == vt)
            })
            .cloned()
            .collect();

        if query.sort == RuleSort::VisaType {
            let order: HashMap<String, u32> = self
                .directory
                .all()
                .await?
                .into_iter()
                .map(|v| (v.code, v.display_order))
                .collect();
            // codes missing from the directory sort last; the sort is stable
            // so snapshot order survives within each group
            rules.sort_by_key(|r| order.get(r.visa_type()).copied().unwrap_or(u32::MAX));
        }

        Ok(ListRulesResult {
            version: snapshot.version(),
            rules,
        })
    }
}
