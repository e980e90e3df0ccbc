//! Knowledge file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the JSON knowledge seed files.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeConfig {
    /// Rule definitions file
    #[serde(default = "default_rules_file")]
    pub rules_file: PathBuf,

    /// Visa type directory file; built-in directory is used when unset
    #[serde(default)]
    pub visa_types_file: Option<PathBuf>,
}

impl KnowledgeConfig {
    /// Validate knowledge configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let path = self.rules_file.as_os_str();
        if path.is_empty() {
            return Err(ValidationError::EmptyRulesFile);
        }
        if self.rules_file.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(ValidationError::RulesFileNotJson);
        }
        Ok(())
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            rules_file: default_rules_file(),
            visa_types_file: None,
        }
    }
}

fn default_rules_file() -> PathBuf {
    PathBuf::from("knowledge/rules.json")
}
