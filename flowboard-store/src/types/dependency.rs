//! Task dependency types

use super::ids::{DependencyId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed ordering constraint between two tasks, drawn as an arrow
/// from predecessor to successor on the timeline.
///
/// Both ends are weak references. A dependency whose task has been deleted
/// stays in the table and is skipped at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub id: DependencyId,
    pub predecessor_id: TaskId,
    pub successor_id: TaskId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDependency {
    pub predecessor_id: TaskId,
    pub successor_id: TaskId,
}

impl NewDependency {
    /// Create dependency fields
    pub fn new(predecessor_id: TaskId, successor_id: TaskId) -> Self {
        Self {
            predecessor_id,
            successor_id,
        }
    }
}

/// Partial update for a dependency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyPatch {
    pub predecessor_id: Option<TaskId>,
    pub successor_id: Option<TaskId>,
}

impl DependencyPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predecessor
    pub fn with_predecessor(mut self, id: TaskId) -> Self {
        self.predecessor_id = Some(id);
        self
    }

    /// Set the successor
    pub fn with_successor(mut self, id: TaskId) -> Self {
        self.successor_id = Some(id);
        self
    }

    /// Merge the present fields over the dependency
    pub fn apply(&self, dependency: &mut Dependency) {
        if let Some(id) = self.predecessor_id {
            dependency.predecessor_id = id;
        }
        if let Some(id) = self.successor_id {
            dependency.successor_id = id;
        }
    }
}
