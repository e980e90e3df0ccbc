//! HTTP DTOs for rule authoring endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::rules::{RuleDraft, RuleSort, SaveResult};
use crate::domain::foundation::{CombineMode, SnapshotVersion};
use crate::domain::knowledge::{Condition, Issue, OrganizeMode, Rule, ValidationReport};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRulesParams {
    #[serde(default)]
    pub visa_type: Option<String>,
    #[serde(default)]
    pub sort: RuleSort,
}

/// Request to create a rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRuleRequest {
    pub visa_type: String,
    #[serde(default)]
    pub name: String,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub combine_mode: CombineMode,
    pub action: String,
    #[serde(default)]
    pub insert_at: Option<usize>,
}

impl CreateRuleRequest {
    pub fn into_draft(self) -> (RuleDraft, Option<usize>) {
        (
            RuleDraft {
                visa_type: self.visa_type,
                name: self.name,
                conditions: self.conditions,
                combine_mode: self.combine_mode,
                action: self.action,
            },
            self.insert_at,
        )
    }
}

/// Request to update a rule (addressed by path action).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRuleRequest {
    pub visa_type: String,
    #[serde(default)]
    pub name: String,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub combine_mode: CombineMode,
    pub action: String,
}

impl UpdateRuleRequest {
    pub fn into_draft(self) -> RuleDraft {
        RuleDraft {
            visa_type: self.visa_type,
            name: self.name,
            conditions: self.conditions,
            combine_mode: self.combine_mode,
            action: self.action,
        }
    }
}

/// Request to reorder rules explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    pub actions: Vec<String>,
}

/// Request to auto-organize.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizeRequest {
    #[serde(default)]
    pub mode: OrganizeMode,
}

/// Query parameters for validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateParams {
    #[serde(default)]
    pub visa_type: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One rule on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDto {
    pub ordinal: u32,
    pub action: String,
    pub name: String,
    pub visa_type: String,
    pub combine_mode: CombineMode,
    pub conditions: Vec<Condition>,
}

impl From<&Rule> for RuleDto {
    fn from(rule: &Rule) -> Self {
        Self {
            ordinal: rule.ordinal(),
            action: rule.action().to_string(),
            name: rule.name().to_string(),
            visa_type: rule.visa_type().to_string(),
            combine_mode: rule.combine_mode(),
            conditions: rule.conditions().to_vec(),
        }
    }
}

/// One validation issue on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDto {
    pub message: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rule_refs: Vec<String>,
}

impl From<&Issue> for IssueDto {
    fn from(issue: &Issue) -> Self {
        Self {
            message: issue.message.clone(),
            severity: issue.severity.to_string(),
            rule_refs: issue.rule_refs.clone(),
        }
    }
}

/// Response to create / update / delete: the published version plus the
/// validator's current findings.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub status: String,
    pub version: SnapshotVersion,
    pub issues: Vec<IssueDto>,
}

impl SaveResponse {
    pub fn from_result(status: &str, result: SaveResult) -> Self {
        Self {
            status: status.to_string(),
            version: result.version,
            issues: result.issues.iter().map(IssueDto::from).collect(),
        }
    }
}

/// Response to the validation check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub status: String,
    pub issues: Vec<IssueDto>,
}

impl From<ValidationReport> for ValidationResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            status: if report.is_ok() { "ok" } else { "issues" }.to_string(),
            issues: report.issues.iter().map(IssueDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge::Severity;

    #[test]
    fn create_request_deserializes_with_defaults() {
        let json = r#"{
            "visa_type": "E",
            "conditions": [{"fact": "x"}],
            "action": "eligible_e"
        }"#;
        let req: CreateRuleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.combine_mode, CombineMode::And);
        assert!(req.insert_at.is_none());
        assert!(req.name.is_empty());
    }

    #[test]
    fn validation_response_status_reflects_issues() {
        let ok: ValidationResponse = ValidationReport { issues: vec![] }.into();
        assert_eq!(ok.status, "ok");

        let not_ok: ValidationResponse = ValidationReport {
            issues: vec![Issue {
                severity: Severity::Warning,
                message: "something".to_string(),
                rule_refs: vec![],
            }],
        }
        .into();
        assert_eq!(not_ok.status, "issues");
    }
}
