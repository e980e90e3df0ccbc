//! Rule store port.
//!
//! The store holds exactly one current snapshot at a time. Readers always
//! receive an `Arc` to a fixed version; writers publish whole successor
//! snapshots atomically.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SnapshotVersion};
use crate::domain::knowledge::{KnowledgeError, RuleSnapshot};

/// Port for the shared, versioned rule base.
///
/// Implementations must guarantee:
/// - `current` never observes a partially applied edit
/// - `publish` is atomic and rejects stale predecessors
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Returns the current snapshot.
    async fn current(&self) -> Result<Arc<RuleSnapshot>, DomainError>;

    /// Atomically replaces the current snapshot.
    ///
    /// `expected` must equal the version the edit was derived from; the
    /// publish is rejected otherwise, so concurrent editors cannot silently
    /// overwrite each other.
    ///
    /// # Errors
    ///
    /// - `VersionConflict` if the current version is not `expected`
    async fn publish(
        &self,
        expected: SnapshotVersion,
        snapshot: RuleSnapshot,
    ) -> Result<Arc<RuleSnapshot>, KnowledgeError>;
}
