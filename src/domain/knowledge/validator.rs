//! Structural checks over a rule snapshot.
//!
//! All checks are collected, never short-circuited; the validator never
//! mutates the snapshot. Error-severity issues make a snapshot unusable for
//! new consultations, warnings do not.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use std::fmt;

use super::graph::DependencyGraph;
use super::snapshot::RuleSnapshot;
use super::visa_type::VisaType;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// Actions of the rules involved.
    pub rule_refs: Vec<String>,
}

impl Issue {
    pub fn error(message: impl Into<String>, rule_refs: Vec<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            rule_refs,
        }
    }

    pub fn warning(message: impl Into<String>, rule_refs: Vec<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            rule_refs,
        }
    }
}

/// Result of validating one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when no issues at all were found (warnings included).
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when at least one error-severity issue exists.
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == Severity::Error)
    }

    /// The error-severity issues only.
    pub fn errors(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect()
    }
}

/// Runs all structural checks over a snapshot.
///
/// `visa_types` is the directory used for the orphan check; pass an empty
/// slice to skip it (e.g. when only error-severity issues matter).
pub fn validate(snapshot: &RuleSnapshot, visa_types: &[VisaType]) -> ValidationReport {
    let graph = DependencyGraph::build(snapshot);
    let mut issues = Vec::new();

    check_duplicate_actions(snapshot, &mut issues);
    check_cycles(snapshot, &graph, &mut issues);
    check_multi_producers(snapshot, &graph, &mut issues);
    check_dangling_references(snapshot, &mut issues);
    check_orphan_visa_types(snapshot, visa_types, &mut issues);

    ValidationReport { issues }
}

fn check_duplicate_actions(snapshot: &RuleSnapshot, issues: &mut Vec<Issue>) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for rule in snapshot.rules() {
        *seen.entry(rule.action()).or_insert(0) += 1;
    }
    for (action, count) in seen {
        if count > 1 {
            issues.push(Issue::error(
                format!("Action '{}' is declared by {} rules", action, count),
                vec![action.to_string()],
            ));
        }
    }
}

fn check_cycles(snapshot: &RuleSnapshot, graph: &DependencyGraph, issues: &mut Vec<Issue>) {
    if let Err(stranded) = graph.topological_order() {
        let refs: Vec<String> = stranded
            .iter()
            .map(|&i| snapshot.rules()[i].action().to_string())
            .collect();
        issues.push(Issue::error(
            format!("Rules form a dependency cycle: {}", refs.join(" -> ")),
            refs,
        ));
    }
}

fn check_multi_producers(snapshot: &RuleSnapshot, graph: &DependencyGraph, issues: &mut Vec<Issue>) {
    for fact in graph.multi_producer_facts() {
        let refs: Vec<String> = snapshot
            .rules()
            .iter()
            .filter(|r| r.action() == fact.as_str())
            .map(|r| r.action().to_string())
            .collect();
        issues.push(Issue::warning(
            format!(
                "Fact '{}' has several producers; dependency edges for it are ignored",
                fact
            ),
            refs,
        ));
    }
}

fn check_dangling_references(snapshot: &RuleSnapshot, issues: &mut Vec<Issue>) {
    let produced: BTreeSet<&str> = snapshot.actions();

    // A fact is a recognized input when some condition carries an authored
    // question prompt for it.
    let mut askable: BTreeSet<&str> = BTreeSet::new();
    for rule in snapshot.rules() {
        for condition in rule.conditions() {
            if condition.question.is_some() {
                askable.insert(condition.fact.as_str());
            }
        }
    }

    let mut reported: BTreeSet<&str> = BTreeSet::new();
    for rule in snapshot.rules() {
        for condition in rule.conditions() {
            let fact = condition.fact.as_str();
            if produced.contains(fact) || askable.contains(fact) || reported.contains(fact) {
                continue;
            }
            reported.insert(fact);
            let refs: Vec<String> = snapshot
                .rules()
                .iter()
                .filter(|r| r.references(fact))
                .map(|r| r.action().to_string())
                .collect();
            issues.push(Issue::warning(
                format!(
                    "Fact '{}' is neither produced by any rule nor asked of the applicant",
                    fact
                ),
                refs,
            ));
        }
    }
}

fn check_orphan_visa_types(
    snapshot: &RuleSnapshot,
    visa_types: &[VisaType],
    issues: &mut Vec<Issue>,
) {
    let used: BTreeSet<&str> = snapshot.rules().iter().map(|r| r.visa_type()).collect();
    for visa_type in visa_types {
        if !used.contains(visa_type.code.as_str()) {
            issues.push(Issue::warning(
                format!("Visa type '{}' has no rules", visa_type.code),
                Vec::new(),
            ));
        }
    }
}
