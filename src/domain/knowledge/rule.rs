//! Rules and their conditions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CombineMode, DomainError, FactValue};

/// A single fact-comparison test within a rule.
///
/// `question` is the pre-authored prompt shown when this condition must be
/// asked. Conditions on derived facts (facts produced by another rule's
/// action) usually carry no prompt; they are resolved by chaining instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the fact this condition tests.
    pub fact: String,

    /// Expected value of the fact for the condition to hold.
    #[serde(default = "default_expected")]
    pub expected: bool,

    /// Pre-authored question text, if this fact is asked of the applicant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

fn default_expected() -> bool {
    true
}

impl Condition {
    /// Creates a condition expecting the fact to be true.
    pub fn requires(fact: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            expected: true,
            question: None,
        }
    }

    /// Creates a condition expecting the fact to be false.
    pub fn excludes(fact: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            expected: false,
            question: None,
        }
    }

    /// Attaches a pre-authored question prompt.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Evaluates this condition against the given fact value.
    ///
    /// `Unknown` propagates; a known value compares against `expected`.
    pub fn evaluate(&self, value: FactValue) -> FactValue {
        value.matches(self.expected)
    }
}

/// A rule: a set of conditions combined by AND/OR, concluding an action.
///
/// # Invariants
///
/// - `action` is non-empty and unique within a snapshot (snapshot-enforced)
/// - `conditions` is non-empty
/// - `ordinal` equals the rule's position in its snapshot (snapshot-enforced)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Position within the owning snapshot. Assigned by the snapshot.
    #[serde(skip)]
    ordinal: u32,

    /// Code of the visa type this rule argues for.
    visa_type: String,

    /// Human-readable label.
    name: String,

    /// Conditions, in declared order.
    conditions: Vec<Condition>,

    /// How the conditions are combined.
    #[serde(default)]
    combine_mode: CombineMode,

    /// The fact this rule asserts when it fires. Unique key of the rule.
    action: String,
}

impl Rule {
    /// Creates a new rule.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `action` or `visa_type` is empty, or
    ///   `conditions` is empty
    pub fn new(
        visa_type: impl Into<String>,
        name: impl Into<String>,
        conditions: Vec<Condition>,
        combine_mode: CombineMode,
        action: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let visa_type = visa_type.into();
        let action = action.into();
        let name = name.into();

        if action.trim().is_empty() {
            return Err(DomainError::validation("action", "Action cannot be empty"));
        }
        if visa_type.trim().is_empty() {
            return Err(DomainError::validation(
                "visa_type",
                "Visa type cannot be empty",
            ));
        }
        if conditions.is_empty() {
            return Err(DomainError::validation(
                "conditions",
                "A rule needs at least one condition",
            ));
        }

        Ok(Self {
            ordinal: 0,
            visa_type,
            name,
            conditions,
            combine_mode,
            action,
        })
    }

    /// Returns a copy of this rule with the given ordinal.
    pub(crate) fn at_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = ordinal;
        self
    }

    /// Returns the rule's position within its snapshot.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Returns the visa type code this rule belongs to.
    pub fn visa_type(&self) -> &str {
        &self.visa_type
    }

    /// Returns the human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the conditions in declared order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns how the conditions are combined.
    pub fn combine_mode(&self) -> CombineMode {
        self.combine_mode
    }

    /// Returns the fact this rule asserts when it fires.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns true if any condition references the given fact.
    pub fn references(&self, fact: &str) -> bool {
        self.conditions.iter().any(|c| c.fact == fact)
    }
}
