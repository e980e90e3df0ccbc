//! Immutable, versioned rule snapshots.
//!
//! A snapshot is never mutated in place: every edit produces a new snapshot
//! carrying the next version number. Readers holding an `Arc<RuleSnapshot>`
//! therefore always see one consistent rule base, regardless of concurrent
//! authoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SnapshotVersion;

use super::errors::KnowledgeError;
use super::rule::Rule;

/// One immutable, versioned copy of the entire rule base.
///
/// # Invariants
///
/// - rule ordinals equal their positions
/// - versions produced by edit methods strictly increase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    version: SnapshotVersion,
    rules: Vec<Rule>,
}

impl RuleSnapshot {
    /// Creates a snapshot from a rule list, renumbering ordinals to match
    /// positions. Duplicate actions are allowed here; the validator reports
    /// them as errors.
    pub fn new(version: SnapshotVersion, rules: Vec<Rule>) -> Self {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.at_ordinal(i as u32))
            .collect();
        Self { version, rules }
    }

    /// Creates an empty first snapshot.
    pub fn empty() -> Self {
        Self::new(SnapshotVersion::initial(), Vec::new())
    }

    /// Returns the snapshot version.
    pub fn version(&self) -> SnapshotVersion {
        self.version
    }

    /// Returns the rules in declared order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the snapshot holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finds a rule by its action key.
    pub fn find(&self, action: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.action() == action)
    }

    /// Returns the position of a rule by its action key.
    pub fn position(&self, action: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.action() == action)
    }

    /// Returns the set of all action identifiers.
    pub fn actions(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|r| r.action()).collect()
    }

    /// Returns the visa type codes of all rules referencing the given fact.
    pub fn visa_types_referencing(&self, fact: &str) -> BTreeSet<String> {
        self.rules
            .iter()
            .filter(|r| r.references(fact))
            .map(|r| r.visa_type().to_string())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Copy-on-write edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Produces a new snapshot with a rule inserted.
    ///
    /// `insert_at` is clamped to the rule list; `None` appends.
    ///
    /// # Errors
    ///
    /// - `DuplicateAction` if a rule with the same action already exists
    pub fn with_rule_created(
        &self,
        rule: Rule,
        insert_at: Option<usize>,
    ) -> Result<RuleSnapshot, KnowledgeError> {
        if self.find(rule.action()).is_some() {
            return Err(KnowledgeError::duplicate_action(rule.action()));
        }

        let mut rules = self.rules.clone();
        let index = insert_at.unwrap_or(rules.len()).min(rules.len());
        rules.insert(index, rule);
        Ok(self.successor(rules))
    }

    /// Produces a new snapshot with the rule at `action` replaced.
    ///
    /// The replacement keeps the original position. Renaming the action is
    /// allowed as long as the new key does not collide with another rule.
    ///
    /// # Errors
    ///
    /// - `RuleNotFound` if no rule has the given action
    /// - `DuplicateAction` if the replacement's action collides
    pub fn with_rule_updated(
        &self,
        action: &str,
        replacement: Rule,
    ) -> Result<RuleSnapshot, KnowledgeError> {
        let index = self
            .position(action)
            .ok_or_else(|| KnowledgeError::rule_not_found(action))?;

        if replacement.action() != action && self.find(replacement.action()).is_some() {
            return Err(KnowledgeError::duplicate_action(replacement.action()));
        }

        let mut rules = self.rules.clone();
        rules[index] = replacement;
        Ok(self.successor(rules))
    }

    /// Produces a new snapshot without the rule at `action`.
    ///
    /// # Errors
    ///
    /// - `RuleNotFound` if no rule has the given action
    pub fn with_rule_deleted(&self, action: &str) -> Result<RuleSnapshot, KnowledgeError> {
        let index = self
            .position(action)
            .ok_or_else(|| KnowledgeError::rule_not_found(action))?;

        let mut rules = self.rules.clone();
        rules.remove(index);
        Ok(self.successor(rules))
    }

    /// Produces a new snapshot reordered to the given action list.
    ///
    /// Actions not listed keep their relative order after the listed ones;
    /// listed actions that do not exist are ignored.
    pub fn with_order(&self, actions: &[String]) -> RuleSnapshot {
        let mut remaining: Vec<Option<Rule>> = self.rules.iter().cloned().map(Some).collect();
        let mut reordered = Vec::with_capacity(self.rules.len());

        for action in actions {
            if let Some(index) = self
                .rules
                .iter()
                .position(|r| r.action() == action.as_str())
            {
                if let Some(rule) = remaining[index].take() {
                    reordered.push(rule);
                }
            }
        }
        reordered.extend(remaining.into_iter().flatten());

        self.successor(reordered)
    }

    /// Produces the successor snapshot carrying the given rules.
    pub(crate) fn successor(&self, rules: Vec<Rule>) -> RuleSnapshot {
        RuleSnapshot::new(self.version.next(), rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CombineMode;
    use crate::domain::knowledge::rule::Condition;

    fn rule(action: &str) -> Rule {
        Rule::new(
            "E",
            action,
            vec![Condition::requires("x")],
            CombineMode::And,
            action,
        )
        .unwrap()
    }

    fn snapshot(actions: &[&str]) -> RuleSnapshot {
        RuleSnapshot::new(
            SnapshotVersion::initial(),
            actions.iter().map(|a| rule(a)).collect(),
        )
    }

    #[test]
    fn new_renumbers_ordinals() {
        let snap = snapshot(&["a", "b", "c"]);
        let ordinals: Vec<u32> = snap.rules().iter().map(|r| r.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn create_appends_by_default() {
        let snap = snapshot(&["a"]);
        let next = snap.with_rule_created(rule("b"), None).unwrap();
        assert_eq!(next.version(), snap.version().next());
        assert_eq!(next.position("b"), Some(1));
        // original untouched
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn create_inserts_at_clamped_position() {
        let snap = snapshot(&["a", "b"]);
        let next = snap.with_rule_created(rule("c"), Some(0)).unwrap();
        assert_eq!(next.position("c"), Some(0));

        let clamped = snap.with_rule_created(rule("d"), Some(99)).unwrap();
        assert_eq!(clamped.position("d"), Some(2));
    }

    #[test]
    fn create_rejects_duplicate_action() {
        let snap = snapshot(&["a"]);
        let result = snap.with_rule_created(rule("a"), None);
        assert_eq!(result, Err(KnowledgeError::duplicate_action("a")));
    }

    #[test]
    fn update_replaces_in_place() {
        let snap = snapshot(&["a", "b"]);
        let replacement = Rule::new(
            "L",
            "renamed",
            vec![Condition::requires("y")],
            CombineMode::Or,
            "b2",
        )
        .unwrap();
        let next = snap.with_rule_updated("b", replacement).unwrap();
        assert_eq!(next.position("b2"), Some(1));
        assert!(next.find("b").is_none());
    }

    #[test]
    fn update_rejects_rename_collision() {
        let snap = snapshot(&["a", "b"]);
        let result = snap.with_rule_updated("b", rule("a"));
        assert_eq!(result, Err(KnowledgeError::duplicate_action("a")));
    }

    #[test]
    fn update_unknown_action_is_not_found() {
        let snap = snapshot(&["a"]);
        let result = snap.with_rule_updated("missing", rule("z"));
        assert_eq!(result, Err(KnowledgeError::rule_not_found("missing")));
    }

    #[test]
    fn delete_removes_and_renumbers() {
        let snap = snapshot(&["a", "b", "c"]);
        let next = snap.with_rule_deleted("b").unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next.rules()[1].action(), "c");
        assert_eq!(next.rules()[1].ordinal(), 1);
    }

    #[test]
    fn with_order_moves_listed_and_keeps_rest() {
        let snap = snapshot(&["a", "b", "c", "d"]);
        let next = snap.with_order(&["c".to_string(), "a".to_string()]);
        let order: Vec<&str> = next.rules().iter().map(|r| r.action()).collect();
        assert_eq!(order, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn visa_types_referencing_collects_codes() {
        let mut rules = vec![rule("a")];
        rules.push(
            Rule::new(
                "L",
                "l rule",
                vec![Condition::requires("x")],
                CombineMode::And,
                "b",
            )
            .unwrap(),
        );
        let snap = RuleSnapshot::new(SnapshotVersion::initial(), rules);
        let codes = snap.visa_types_referencing("x");
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec!["E".to_string(), "L".to_string()]
        );
    }
}
