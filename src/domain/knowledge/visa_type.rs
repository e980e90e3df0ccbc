//! Visa category metadata.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// A visa category that rules can argue for.
///
/// Managed independently of the rule base; rules reference categories by
/// `code` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaType {
    /// Short code, e.g. "E", "L", "H-1B".
    pub code: String,

    /// Display name.
    pub name: String,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position in display and questioning order (lower comes first).
    #[serde(default, alias = "order")]
    pub display_order: u32,
}

impl VisaType {
    /// Creates a new visa type.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `code` is empty
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("code", "Code cannot be empty"));
        }
        Ok(Self {
            code,
            name: name.into(),
            description: None,
            display_order: 0,
        })
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the display order.
    pub fn with_display_order(mut self, display_order: u32) -> Self {
        self.display_order = display_order;
        self
    }
}
