//! In-memory visa type directory.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::knowledge::{KnowledgeError, VisaType};
use crate::ports::VisaTypeDirectory;

/// In-memory implementation of [`VisaTypeDirectory`].
#[derive(Debug, Default)]
pub struct InMemoryVisaTypeDirectory {
    visa_types: RwLock<Vec<VisaType>>,
}

impl InMemoryVisaTypeDirectory {
    /// Creates a directory seeded with the given visa types.
    pub fn new(visa_types: Vec<VisaType>) -> Self {
        Self {
            visa_types: RwLock::new(visa_types),
        }
    }

    /// Creates an empty directory.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisaTypeDirectory for InMemoryVisaTypeDirectory {
    async fn all(&self) -> Result<Vec<VisaType>, DomainError> {
        let mut visa_types = self.visa_types.read().await.clone();
        visa_types.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.code.cmp(&b.code))
        });
        Ok(visa_types)
    }

    async fn find(&self, code: &str) -> Result<Option<VisaType>, DomainError> {
        let visa_types = self.visa_types.read().await;
        Ok(visa_types.iter().find(|v| v.code == code).cloned())
    }

    async fn insert(&self, visa_type: VisaType) -> Result<(), KnowledgeError> {
        let mut visa_types = self.visa_types.write().await;
        if visa_types.iter().any(|v| v.code == visa_type.code) {
            return Err(KnowledgeError::DuplicateVisaType(visa_type.code));
        }
        visa_types.push(visa_type);
        Ok(())
    }

    async fn update(&self, code: &str, visa_type: VisaType) -> Result<(), KnowledgeError> {
        let mut visa_types = self.visa_types.write().await;
        match visa_types.iter_mut().find(|v| v.code == code) {
            Some(existing) => {
                *existing = visa_type;
                Ok(())
            }
            None => Err(KnowledgeError::VisaTypeNotFound(code.to_string())),
        }
    }

    async fn remove(&self, code: &str) -> Result<(), KnowledgeError> {
        let mut visa_types = self.visa_types.write().await;
        let before = visa_types.len();
        visa_types.retain(|v| v.code != code);
        if visa_types.len() == before {
            return Err(KnowledgeError::VisaTypeNotFound(code.to_string()));
        }
        Ok(())
    }
}
