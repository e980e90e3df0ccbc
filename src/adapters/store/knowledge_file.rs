//! JSON knowledge-file loader.
//!
//! Seeds the rule store and visa type directory from two JSON files at
//! startup. Loading is read-only: admin edits publish new snapshots in
//! memory and are not written back (durable persistence belongs to the
//! external persistence collaborator).

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, SnapshotVersion};
use crate::domain::knowledge::{Rule, RuleSnapshot, VisaType};

/// Locations of the knowledge seed files.
#[derive(Debug, Clone)]
pub struct KnowledgeFiles {
    /// Rule definitions, `{"rules": [...]}`.
    pub rules_file: PathBuf,
    /// Visa type directory, `{"visa_types": [...]}`. Falls back to the
    /// built-in directory when absent.
    pub visa_types_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    rules: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
struct VisaTypesFile {
    visa_types: Vec<VisaType>,
}

/// Built-in visa type directory, used when no file is configured.
static DEFAULT_VISA_TYPES: Lazy<Vec<VisaType>> = Lazy::new(|| {
    [
        ("E", "Treaty trader / investor", 0),
        ("L", "Intracompany transferee", 1),
        ("H-1B", "Specialty occupation", 2),
        ("B", "Business visitor", 3),
        ("J-1", "Exchange visitor", 4),
    ]
    .into_iter()
    .map(|(code, name, order)| {
        VisaType::new(code, name)
            .expect("built-in visa type codes are non-empty")
            .with_display_order(order)
    })
    .collect()
});

/// Loads the initial snapshot and visa type directory.
///
/// # Errors
///
/// - `StorageError` when the rules file cannot be read
/// - `ValidationFailed` when a file does not parse
pub async fn load_knowledge(
    files: &KnowledgeFiles,
) -> Result<(RuleSnapshot, Vec<VisaType>), DomainError> {
    let rules = load_rules(&files.rules_file).await?;
    let snapshot = RuleSnapshot::new(SnapshotVersion::initial(), rules);

    let visa_types = match &files.visa_types_file {
        Some(path) => load_visa_types(path).await?,
        None => {
            tracing::warn!("no visa types file configured, using built-in directory");
            DEFAULT_VISA_TYPES.clone()
        }
    };

    tracing::info!(
        rules = snapshot.len(),
        visa_types = visa_types.len(),
        "loaded knowledge files"
    );
    Ok((snapshot, visa_types))
}

async fn load_rules(path: &Path) -> Result<Vec<Rule>, DomainError> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        DomainError::new(
            ErrorCode::StorageError,
            format!("Cannot read rules file {}: {}", path.display(), e),
        )
    })?;
    let parsed: RulesFile = serde_json::from_str(&raw).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Rules file {} does not parse: {}", path.display(), e),
        )
    })?;
    Ok(parsed.rules)
}

async fn load_visa_types(path: &Path) -> Result<Vec<VisaType>, DomainError> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        DomainError::new(
            ErrorCode::StorageError,
            format!("Cannot read visa types file {}: {}", path.display(), e),
        )
    })?;
    let parsed: VisaTypesFile = serde_json::from_str(&raw).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Visa types file {} does not parse: {}", path.display(), e),
        )
    })?;
    Ok(parsed.visa_types)
}
