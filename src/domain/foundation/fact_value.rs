//! Tri-state value of a fact in working memory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a fact: true, false, or not (yet) known.
///
/// Facts absent from a fact base are implicitly `Unknown`; the engine never
/// distinguishes "never asked" from "answered with don't-know" when combining
/// conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FactValue {
    True,
    False,
    #[default]
    Unknown,
}

impl FactValue {
    /// Converts a definite boolean into a fact value.
    pub fn from_bool(value: bool) -> Self {
        if value {
            FactValue::True
        } else {
            FactValue::False
        }
    }

    /// Returns true if the value is definite (not `Unknown`).
    pub fn is_known(&self) -> bool {
        !matches!(self, FactValue::Unknown)
    }

    /// Compares this value against an expectation.
    ///
    /// `Unknown` propagates: an unknown fact matches no expectation either way.
    pub fn matches(&self, expected: bool) -> FactValue {
        match self {
            FactValue::Unknown => FactValue::Unknown,
            FactValue::True => FactValue::from_bool(expected),
            FactValue::False => FactValue::from_bool(!expected),
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FactValue::True => "true",
            FactValue::False => "false",
            FactValue::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(FactValue::default(), FactValue::Unknown);
    }

    #[test]
    fn from_bool_converts() {
        assert_eq!(FactValue::from_bool(true), FactValue::True);
        assert_eq!(FactValue::from_bool(false), FactValue::False);
    }

    #[test]
    fn matches_compares_against_expectation() {
        assert_eq!(FactValue::True.matches(true), FactValue::True);
        assert_eq!(FactValue::True.matches(false), FactValue::False);
        assert_eq!(FactValue::False.matches(false), FactValue::True);
        assert_eq!(FactValue::False.matches(true), FactValue::False);
    }

    #[test]
    fn matches_propagates_unknown() {
        assert_eq!(FactValue::Unknown.matches(true), FactValue::Unknown);
        assert_eq!(FactValue::Unknown.matches(false), FactValue::Unknown);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&FactValue::True).unwrap(), "\"true\"");
        assert_eq!(
            serde_json::to_string(&FactValue::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let v: FactValue = serde_json::from_str("\"false\"").unwrap();
        assert_eq!(v, FactValue::False);
    }
}
