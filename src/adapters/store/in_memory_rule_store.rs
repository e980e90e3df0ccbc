//! In-memory rule store.
//!
//! Holds one current snapshot behind a read-write lock. Readers clone the
//! `Arc`, so a request keeps working against its version even while an edit
//! publishes a successor.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SnapshotVersion};
use crate::domain::knowledge::{KnowledgeError, RuleSnapshot};
use crate::ports::RuleStore;

/// In-memory implementation of [`RuleStore`].
#[derive(Debug)]
pub struct InMemoryRuleStore {
    current: RwLock<Arc<RuleSnapshot>>,
}

impl InMemoryRuleStore {
    /// Creates a store seeded with the given snapshot.
    pub fn new(snapshot: RuleSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Creates a store holding an empty rule base.
    pub fn empty() -> Self {
        Self::new(RuleSnapshot::empty())
    }
}

#[async_trait]
impl RuleStore for InMemoryRuleStore {
    async fn current(&self) -> Result<Arc<RuleSnapshot>, DomainError> {
        Ok(Arc::clone(&*self.current.read().await))
    }

    async fn publish(
        &self,
        expected: SnapshotVersion,
        snapshot: RuleSnapshot,
    ) -> Result<Arc<RuleSnapshot>, KnowledgeError> {
        let mut current = self.current.write().await;
        if current.version() != expected {
            return Err(KnowledgeError::VersionConflict {
                expected,
                actual: current.version(),
            });
        }
        let published = Arc::new(snapshot);
        *current = Arc::clone(&published);
        tracing::info!(version = %published.version(), rules = published.len(), "published rule snapshot");
        Ok(published)
    }
}
