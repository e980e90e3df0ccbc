//! Dependency graph derived from a rule snapshot.
//!
//! An edge A -> B exists when rule B consumes a fact whose only producer is
//! rule A's action. Facts with several producers contribute no edges; the
//! validator reports them separately (they can only occur alongside a
//! duplicate-action error).

use std::collections::{BTreeMap, BTreeSet};

use super::snapshot::RuleSnapshot;

/// Directed dependency graph over the rules of one snapshot.
///
/// Nodes are rule positions (ordinals) within the snapshot.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// For each rule, the positions of rules it depends on (its producers).
    dependencies: Vec<BTreeSet<usize>>,
    /// For each rule, the positions of rules depending on it (its consumers).
    dependents: Vec<BTreeSet<usize>>,
    /// Facts asserted by more than one rule.
    multi_producer_facts: Vec<String>,
}

impl DependencyGraph {
    /// Builds the graph for a snapshot.
    pub fn build(snapshot: &RuleSnapshot) -> Self {
        let rules = snapshot.rules();
        let mut producers: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, rule) in rules.iter().enumerate() {
            producers.entry(rule.action()).or_default().push(i);
        }

        let multi_producer_facts = producers
            .iter()
            .filter(|(_, rules)| rules.len() > 1)
            .map(|(fact, _)| fact.to_string())
            .collect();

        let mut dependencies = vec![BTreeSet::new(); rules.len()];
        let mut dependents = vec![BTreeSet::new(); rules.len()];

        for (consumer, rule) in rules.iter().enumerate() {
            for condition in rule.conditions() {
                if let Some(fact_producers) = producers.get(condition.fact.as_str()) {
                    if let [producer] = fact_producers.as_slice() {
                        if *producer != consumer {
                            dependencies[consumer].insert(*producer);
                            dependents[*producer].insert(consumer);
                        }
                    }
                }
            }
        }

        Self {
            dependencies,
            dependents,
            multi_producer_facts,
        }
    }

    /// Returns the number of rules in the graph.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Positions of rules that the given rule consumes facts from.
    pub fn dependencies_of(&self, rule: usize) -> &BTreeSet<usize> {
        &self.dependencies[rule]
    }

    /// Positions of rules consuming the given rule's action.
    pub fn dependents_of(&self, rule: usize) -> &BTreeSet<usize> {
        &self.dependents[rule]
    }

    /// Facts asserted by more than one rule.
    pub fn multi_producer_facts(&self) -> &[String] {
        &self.multi_producer_facts
    }

    /// Computes a dependency-respecting evaluation order.
    ///
    /// Kahn's algorithm; among the ready candidates the smallest position
    /// (original ordinal) is always chosen, so independent rules keep their
    /// declared order. Returns the drained order plus the positions stranded
    /// in cycles (empty when the graph is a DAG).
    pub fn evaluation_order(&self) -> (Vec<usize>, Vec<usize>) {
        let n = self.len();
        let mut in_degree: Vec<usize> = (0..n).map(|i| self.dependencies[i].len()).collect();
        let mut ready: BTreeSet<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut drained = vec![false; n];
        let mut order = Vec::with_capacity(n);

        while let Some(&next) = ready.iter().next() {
            ready.remove(&next);
            drained[next] = true;
            order.push(next);
            for &consumer in &self.dependents[next] {
                in_degree[consumer] -= 1;
                if in_degree[consumer] == 0 {
                    ready.insert(consumer);
                }
            }
        }

        let stranded = (0..n).filter(|&i| !drained[i]).collect();
        (order, stranded)
    }

    /// Computes a full topological order.
    ///
    /// # Errors
    ///
    /// Returns the positions participating in (or downstream of) a cycle
    /// when the graph is not a DAG.
    pub fn topological_order(&self) -> Result<Vec<usize>, Vec<usize>> {
        let (order, stranded) = self.evaluation_order();
        if stranded.is_empty() {
            Ok(order)
        } else {
            Err(stranded)
        }
    }
}
