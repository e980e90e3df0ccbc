//! The single-pass forward-chaining evaluator.
//!
//! `evaluate` is a pure function of a snapshot and a fact base. It holds no
//! state between calls; the session layer re-runs it from scratch after
//! every history change, which is what makes back-stepping trivially
//! consistent.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{CombineMode, FactValue, RuleStatus};
use crate::domain::knowledge::{DependencyGraph, Rule, RuleSnapshot};

use super::evaluation::{EvaluationResult, Question};
use super::fact_base::FactBase;

/// Evaluates every rule of `snapshot` against `initial_facts`.
///
/// Rules are processed in dependency order (producers before consumers,
/// declared order among independent rules), so a single pass suffices:
/// by the time a rule is combined, every fact a predecessor could assert
/// has been asserted. Rules stranded on a cyclic dependency are never
/// entered and keep status `Pending` - the pass is total even on a rule
/// base the validator would reject.
pub fn evaluate(snapshot: &RuleSnapshot, initial_facts: &FactBase) -> EvaluationResult {
    let graph = DependencyGraph::build(snapshot);
    let (order, _stranded) = graph.evaluation_order();

    let rules = snapshot.rules();
    let mut statuses: Vec<RuleStatus> = vec![RuleStatus::Pending; rules.len()];
    let mut facts = initial_facts.clone();
    let mut derived_facts = Vec::new();

    for index in order {
        let rule = &rules[index];
        statuses[index] = RuleStatus::Evaluating;
        let outcome = combine(rule, &facts);
        statuses[index] = outcome;

        if outcome == RuleStatus::Fired {
            // Forward chaining: the asserted fact overrides any answered
            // value, matching how derived conclusions outrank an applicant's
            // "don't know".
            facts.set(rule.action(), FactValue::True);
            derived_facts.push(rule.action().to_string());
        }
    }

    // Complete when no askable question remains. A rule can stay uncertain
    // past that point only when every open condition was answered
    // "don't know" - re-asking cannot move it, so the pass terminates.
    let next_question = select_next_question(rules, &statuses, &facts);
    let is_complete = next_question.is_none();

    let diagnosis = if is_complete {
        let mut eligible = BTreeSet::new();
        for (index, rule) in rules.iter().enumerate() {
            if statuses[index] == RuleStatus::Fired {
                eligible.insert(rule.visa_type().to_string());
            }
        }
        Some(eligible)
    } else {
        None
    };

    let rule_statuses: BTreeMap<String, RuleStatus> = rules
        .iter()
        .enumerate()
        .map(|(i, r)| (r.action().to_string(), statuses[i]))
        .collect();

    EvaluationResult {
        rule_statuses,
        facts,
        derived_facts,
        next_question,
        is_complete,
        diagnosis,
    }
}

/// Combines a rule's condition results into a status.
fn combine(rule: &Rule, facts: &FactBase) -> RuleStatus {
    let mut any_true = false;
    let mut any_false = false;
    let mut any_unknown = false;

    for condition in rule.conditions() {
        match condition.evaluate(facts.get(&condition.fact)) {
            FactValue::True => any_true = true,
            FactValue::False => any_false = true,
            FactValue::Unknown => any_unknown = true,
        }
    }

    match rule.combine_mode() {
        CombineMode::And => {
            if any_false {
                RuleStatus::Blocked
            } else if any_unknown {
                RuleStatus::Uncertain
            } else {
                RuleStatus::Fired
            }
        }
        CombineMode::Or => {
            if any_true {
                RuleStatus::Fired
            } else if any_unknown {
                RuleStatus::Uncertain
            } else {
                RuleStatus::Blocked
            }
        }
    }
}

/// Picks the next question: the first uncertain rule in declared order
/// contributes its first condition whose fact is still unrecorded or
/// recorded unknown.
fn select_next_question(
    rules: &[Rule],
    statuses: &[RuleStatus],
    facts: &FactBase,
) -> Option<Question> {
    for (index, rule) in rules.iter().enumerate() {
        if statuses[index] != RuleStatus::Uncertain {
            continue;
        }
        for condition in rule.conditions() {
            // unrecorded means unknown; a recorded "don't know" is skipped
            if !facts.contains(&condition.fact) {
                return Some(Question {
                    fact: condition.fact.clone(),
                    prompt: condition
                        .question
                        .clone()
                        .unwrap_or_else(|| condition.fact.clone()),
                });
            }
        }
        // Every unknown condition of this rule was already answered
        // "don't know"; asking again cannot move it. Look further down.
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SnapshotVersion;
    use crate::domain::knowledge::Condition;

    fn asked(fact: &str) -> Condition {
        Condition::requires(fact).with_question(format!("Is {} the case?", fact))
    }

    fn and_rule(action: &str, visa: &str, conditions: Vec<Condition>) -> Rule {
        Rule::new(visa, action, conditions, CombineMode::And, action).unwrap()
    }

    fn or_rule(action: &str, visa: &str, conditions: Vec<Condition>) -> Rule {
        Rule::new(visa, action, conditions, CombineMode::Or, action).unwrap()
    }

    fn snapshot(rules: Vec<Rule>) -> RuleSnapshot {
        RuleSnapshot::new(SnapshotVersion::initial(), rules)
    }

    fn facts(entries: &[(&str, FactValue)]) -> FactBase {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    // Tri-state combination tables

    #[test]
    fn and_rule_with_true_and_unknown_is_uncertain() {
        let snap = snapshot(vec![and_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(&snap, &facts(&[("a", FactValue::True)]));
        assert_eq!(result.status_of("r"), Some(RuleStatus::Uncertain));
    }

    #[test]
    fn and_rule_with_true_and_false_is_blocked() {
        let snap = snapshot(vec![and_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::True), ("b", FactValue::False)]),
        );
        assert_eq!(result.status_of("r"), Some(RuleStatus::Blocked));
    }

    #[test]
    fn and_rule_with_all_true_fires() {
        let snap = snapshot(vec![and_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::True), ("b", FactValue::True)]),
        );
        assert_eq!(result.status_of("r"), Some(RuleStatus::Fired));
    }

    #[test]
    fn or_rule_with_false_and_unknown_is_uncertain() {
        let snap = snapshot(vec![or_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(&snap, &facts(&[("a", FactValue::False)]));
        assert_eq!(result.status_of("r"), Some(RuleStatus::Uncertain));
    }

    #[test]
    fn or_rule_with_false_and_true_fires() {
        let snap = snapshot(vec![or_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::False), ("b", FactValue::True)]),
        );
        assert_eq!(result.status_of("r"), Some(RuleStatus::Fired));
    }

    #[test]
    fn or_rule_with_all_false_is_blocked() {
        let snap = snapshot(vec![or_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::False), ("b", FactValue::False)]),
        );
        assert_eq!(result.status_of("r"), Some(RuleStatus::Blocked));
    }

    #[test]
    fn negated_condition_fires_on_false_fact() {
        let rule = Rule::new(
            "B",
            "short stay",
            vec![Condition::excludes("intends_long_stay").with_question("Long stay planned?")],
            CombineMode::And,
            "eligible_b",
        )
        .unwrap();
        let snap = snapshot(vec![rule]);
        let result = evaluate(&snap, &facts(&[("intends_long_stay", FactValue::False)]));
        assert_eq!(result.status_of("eligible_b"), Some(RuleStatus::Fired));
    }

    // Forward chaining

    #[test]
    fn fired_rule_feeds_downstream_rule_in_same_pass() {
        let snap = snapshot(vec![
            and_rule("derived", "E", vec![asked("base")]),
            and_rule("goal", "E", vec![Condition::requires("derived")]),
        ]);
        let result = evaluate(&snap, &facts(&[("base", FactValue::True)]));
        assert_eq!(result.status_of("derived"), Some(RuleStatus::Fired));
        assert_eq!(result.status_of("goal"), Some(RuleStatus::Fired));
        assert_eq!(result.derived_facts, vec!["derived", "goal"]);
        assert_eq!(result.facts.get("goal"), FactValue::True);
    }

    #[test]
    fn chaining_works_against_declared_order() {
        // the producer is declared after its consumer
        let snap = snapshot(vec![
            and_rule("goal", "E", vec![Condition::requires("derived")]),
            and_rule("derived", "E", vec![asked("base")]),
        ]);
        let result = evaluate(&snap, &facts(&[("base", FactValue::True)]));
        assert_eq!(result.status_of("goal"), Some(RuleStatus::Fired));
    }

    #[test]
    fn blocked_rule_does_not_assert_its_action() {
        let snap = snapshot(vec![
            and_rule("derived", "E", vec![asked("base")]),
            and_rule("goal", "E", vec![Condition::requires("derived")]),
        ]);
        let result = evaluate(&snap, &facts(&[("base", FactValue::False)]));
        assert_eq!(result.status_of("derived"), Some(RuleStatus::Blocked));
        assert!(!result.facts.contains("derived"));
        // downstream sees the unasserted fact as unknown
        assert_eq!(result.status_of("goal"), Some(RuleStatus::Uncertain));
        assert!(result.derived_facts.is_empty());
    }

    // Next question and completion

    #[test]
    fn next_question_comes_from_first_uncertain_rule() {
        let snap = snapshot(vec![
            and_rule("r1", "E", vec![asked("first"), asked("second")]),
            and_rule("r2", "L", vec![asked("third")]),
        ]);
        let result = evaluate(&snap, &FactBase::new());
        let q = result.next_question.expect("question expected");
        assert_eq!(q.fact, "first");
        assert_eq!(q.prompt, "Is first the case?");
        assert!(!result.is_complete);
    }

    #[test]
    fn next_question_skips_facts_answered_unknown() {
        let snap = snapshot(vec![and_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(&snap, &facts(&[("a", FactValue::Unknown)]));
        let q = result.next_question.expect("question expected");
        assert_eq!(q.fact, "b");
    }

    #[test]
    fn prompt_falls_back_to_fact_name() {
        let snap = snapshot(vec![and_rule(
            "r",
            "E",
            vec![Condition::requires("unprompted_fact")],
        )]);
        let result = evaluate(&snap, &FactBase::new());
        assert_eq!(
            result.next_question.unwrap().prompt,
            "unprompted_fact"
        );
    }

    #[test]
    fn exhausted_uncertain_rules_complete_the_consultation() {
        // both facts answered "don't know": nothing left to ask
        let snap = snapshot(vec![and_rule("r", "E", vec![asked("a"), asked("b")])]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::Unknown), ("b", FactValue::Unknown)]),
        );
        assert!(result.next_question.is_none());
        assert!(result.is_complete);
        // the rule stayed uncertain, so nothing fired
        assert_eq!(result.status_of("r"), Some(RuleStatus::Uncertain));
        assert_eq!(result.diagnosis, Some(BTreeSet::new()));
    }

    #[test]
    fn completion_reports_fired_visa_types() {
        let snap = snapshot(vec![
            and_rule("eligible_h1b", "H-1B", vec![asked("has_job_offer")]),
            and_rule("eligible_j1", "J-1", vec![asked("is_trainee")]),
        ]);
        let result = evaluate(
            &snap,
            &facts(&[
                ("has_job_offer", FactValue::True),
                ("is_trainee", FactValue::False),
            ]),
        );
        assert!(result.is_complete);
        let diagnosis = result.diagnosis.expect("diagnosis expected");
        assert!(diagnosis.contains("H-1B"));
        assert!(!diagnosis.contains("J-1"));
    }

    #[test]
    fn multiple_fired_visa_types_are_all_reported() {
        let snap = snapshot(vec![
            and_rule("eligible_e", "E", vec![asked("a")]),
            and_rule("eligible_l", "L", vec![asked("b")]),
        ]);
        let result = evaluate(
            &snap,
            &facts(&[("a", FactValue::True), ("b", FactValue::True)]),
        );
        let diagnosis = result.diagnosis.unwrap();
        assert_eq!(diagnosis.len(), 2);
    }

    // Cyclic snapshots stay total

    #[test]
    fn cyclic_rules_stay_pending() {
        let snap = snapshot(vec![
            and_rule("a", "E", vec![Condition::requires("b")]),
            and_rule("b", "E", vec![Condition::requires("a")]),
            and_rule("c", "L", vec![asked("input")]),
        ]);
        let result = evaluate(&snap, &facts(&[("input", FactValue::True)]));
        assert_eq!(result.status_of("a"), Some(RuleStatus::Pending));
        assert_eq!(result.status_of("b"), Some(RuleStatus::Pending));
        assert_eq!(result.status_of("c"), Some(RuleStatus::Fired));
    }

    // Determinism

    #[test]
    fn evaluation_is_deterministic() {
        let snap = snapshot(vec![
            and_rule("derived", "E", vec![asked("x"), asked("y")]),
            or_rule("goal", "E", vec![Condition::requires("derived"), asked("z")]),
        ]);
        let input = facts(&[("x", FactValue::True), ("z", FactValue::Unknown)]);
        let first = evaluate(&snap, &input);
        let second = evaluate(&snap, &input);
        assert_eq!(first, second);
    }
}
