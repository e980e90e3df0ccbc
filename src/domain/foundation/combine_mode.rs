//! CombineMode enum - how a rule's conditions are combined.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical connective joining the conditions of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    #[default]
    And,
    Or,
}

impl CombineMode {
    /// Returns true for OR rules.
    pub fn is_or(&self) -> bool {
        matches!(self, CombineMode::Or)
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CombineMode::And => "AND",
            CombineMode::Or => "OR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_and() {
        assert_eq!(CombineMode::default(), CombineMode::And);
    }

    #[test]
    fn display_uses_upper_case() {
        assert_eq!(CombineMode::And.to_string(), "AND");
        assert_eq!(CombineMode::Or.to_string(), "OR");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&CombineMode::Or).unwrap(), "\"or\"");
        let m: CombineMode = serde_json::from_str("\"and\"").unwrap();
        assert_eq!(m, CombineMode::And);
    }
}
