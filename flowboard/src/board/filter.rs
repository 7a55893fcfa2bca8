//! Task and project filtering

use flowboard_store::{Project, Status, Task, UserId};

/// Filter over the task list, driven by the filter bar.
///
/// The filtered result is the rendered order, which is also what the
/// timeline routes its arrows over, so layouts must be recomputed
/// whenever the filter changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub assignee: Option<UserId>,
}

impl TaskFilter {
    /// No filtering
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to one assignee
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Check if any restriction is active
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.assignee.is_some()
    }

    /// Drop all restrictions
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check a single task against the filter
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(assignee) = self.assignee {
            if task.assignee_id != Some(assignee) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, keeping source order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}

/// Case-insensitive project search over name and description
pub fn search_projects(projects: &[Project], term: &str) -> Vec<Project> {
    let needle = term.to_lowercase();
    projects
        .iter()
        .filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
