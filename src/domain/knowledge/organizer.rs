//! Dependency-order reorganization of a snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::KnowledgeError;
use super::graph::DependencyGraph;
use super::snapshot::RuleSnapshot;

/// Reorganization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrganizeMode {
    /// Topological sort over the dependency graph, stable with respect to
    /// the declared order among independent rules.
    #[default]
    Dependency,
}

impl fmt::Display for OrganizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizeMode::Dependency => write!(f, "dependency"),
        }
    }
}

/// Produces a new snapshot with rules permuted into dependency order.
///
/// Producers always precede their consumers; among rules with no dependency
/// relation the original ordinal decides. The reordered snapshot carries the
/// next version and renumbered ordinals.
///
/// # Errors
///
/// - `Cycle` if the dependency graph is not a DAG; no partial order is
///   produced
pub fn reorder(snapshot: &RuleSnapshot, mode: OrganizeMode) -> Result<RuleSnapshot, KnowledgeError> {
    match mode {
        OrganizeMode::Dependency => reorder_by_dependency(snapshot),
    }
}

fn reorder_by_dependency(snapshot: &RuleSnapshot) -> Result<RuleSnapshot, KnowledgeError> {
    let graph = DependencyGraph::build(snapshot);
    let order = graph.topological_order().map_err(|stranded| {
        KnowledgeError::cycle(
            stranded
                .iter()
                .map(|&i| snapshot.rules()[i].action().to_string())
                .collect(),
        )
    })?;

    let rules = order
        .into_iter()
        .map(|i| snapshot.rules()[i].clone())
        .collect();
    Ok(snapshot.successor(rules))
}
