//! Visa type directory port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::knowledge::{KnowledgeError, VisaType};

/// Port for the visa category directory.
///
/// Managed independently of the rule base; rules reference categories by
/// code only.
#[async_trait]
pub trait VisaTypeDirectory: Send + Sync {
    /// Returns all visa types ordered by display order, then code.
    async fn all(&self) -> Result<Vec<VisaType>, DomainError>;

    /// Finds a visa type by code.
    async fn find(&self, code: &str) -> Result<Option<VisaType>, DomainError>;

    /// Adds a visa type.
    ///
    /// # Errors
    ///
    /// - `DuplicateVisaType` if the code is already registered
    async fn insert(&self, visa_type: VisaType) -> Result<(), KnowledgeError>;

    /// Replaces the visa type registered under `code`.
    ///
    /// # Errors
    ///
    /// - `VisaTypeNotFound` if the code is not registered
    async fn update(&self, code: &str, visa_type: VisaType) -> Result<(), KnowledgeError>;

    /// Removes the visa type registered under `code`.
    ///
    /// # Errors
    ///
    /// - `VisaTypeNotFound` if the code is not registered
    async fn remove(&self, code: &str) -> Result<(), KnowledgeError>;
}
