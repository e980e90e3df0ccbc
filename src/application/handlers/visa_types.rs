//! Visa type directory handlers.
//!
//! The directory is managed independently of the rule base, so these
//! handlers are thin wrappers over the port; they exist to keep the HTTP
//! layer free of domain imports.

use std::sync::Arc;

use crate::domain::knowledge::{KnowledgeError, VisaType};
use crate::ports::VisaTypeDirectory;

/// Handler bundling the directory operations.
pub struct VisaTypeHandlers {
    directory: Arc<dyn VisaTypeDirectory>,
}

impl VisaTypeHandlers {
    pub fn new(directory: Arc<dyn VisaTypeDirectory>) -> Self {
        Self { directory }
    }

    /// Lists all visa types in display order.
    pub async fn list(&self) -> Result<Vec<VisaType>, KnowledgeError> {
        Ok(self.directory.all().await?)
    }

    /// Adds a visa type.
    pub async fn create(&self, visa_type: VisaType) -> Result<(), KnowledgeError> {
        let code = visa_type.code.clone();
        self.directory.insert(visa_type).await?;
        tracing::info!(code = %code, "visa type created");
        Ok(())
    }

    /// Replaces the visa type registered under `code`.
    pub async fn update(&self, code: &str, visa_type: VisaType) -> Result<(), KnowledgeError> {
        self.directory.update(code, visa_type).await?;
        tracing::info!(code = %code, "visa type updated");
        Ok(())
    }

    /// Removes the visa type registered under `code`.
    pub async fn delete(&self, code: &str) -> Result<(), KnowledgeError> {
        self.directory.remove(code).await?;
        tracing::info!(code = %code, "visa type deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryVisaTypeDirectory;

    fn handlers() -> VisaTypeHandlers {
        VisaTypeHandlers::new(Arc::new(InMemoryVisaTypeDirectory::new(vec![VisaType::new(
            "E", "Treaty",
        )
        .unwrap()])))
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let handlers = handlers();
        handlers
            .create(VisaType::new("L", "Transfer").unwrap().with_display_order(1))
            .await
            .unwrap();
        let codes: Vec<String> = handlers
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.code)
            .collect();
        assert_eq!(codes, vec!["E", "L"]);
    }

    #[tokio::test]
    async fn create_duplicate_conflicts() {
        let handlers = handlers();
        let result = handlers.create(VisaType::new("E", "Again").unwrap()).await;
        assert!(matches!(result, Err(KnowledgeError::DuplicateVisaType(_))));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_are_not_found() {
        let handlers = handlers();
        assert!(matches!(
            handlers
                .update("Z", VisaType::new("Z", "Zed").unwrap())
                .await,
            Err(KnowledgeError::VisaTypeNotFound(_))
        ));
        assert!(matches!(
            handlers.delete("Z").await,
            Err(KnowledgeError::VisaTypeNotFound(_))
        ));
    }
}
