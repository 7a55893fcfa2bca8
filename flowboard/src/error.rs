//! Error types for the view engines

use flowboard_store::{StoreError, TaskId};
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors surfaced to the rendering boundary. None are fatal; each maps to
/// a transient notification, and a load failure additionally gets a
/// full-page retry affordance. Nothing is retried automatically.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Bulk fetch failed; the previous view state is kept for retry
    #[error("failed to load board data: {source}")]
    Load {
        #[source]
        source: StoreError,
    },

    /// Create or update rejected; the view state was left untouched
    #[error("failed to save task: {source}")]
    Save {
        #[source]
        source: StoreError,
    },

    /// A status change was rejected after the optimistic mutation; the
    /// view has been reconciled against the store
    #[error("task status update rejected: {source}")]
    UpdateFailed {
        #[source]
        source: StoreError,
    },

    /// The referenced task is not in the loaded view
    #[error("task not in view: {id}")]
    UnknownTask { id: TaskId },
}

impl BoardError {
    /// Check if the caller should offer the full-page retry affordance
    pub fn needs_retry_affordance(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}
