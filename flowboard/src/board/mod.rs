//! Board state engine
//!
//! [`BoardView`] owns the in-view task and user lists for one project and
//! applies drag-drop status changes optimistically: the local copy mutates
//! first, the store is told second, and a rejection rolls the whole view
//! back to the store's canonical state with a full reload.

mod filter;
mod partition;

pub use filter::{search_projects, TaskFilter};
pub use partition::{partition_by_status, Columns};

use crate::error::{BoardError, Result};
use flowboard_store::{
    NewTask, ProjectId, Status, Task, TaskId, TaskPatch, TaskService, User, UserService,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Outcome of a drag-drop status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Dropped on the column it was already in; no request was issued
    Unchanged,
    /// The new status is live in the view and confirmed by the store
    Applied,
}

/// The in-view board state for one project.
///
/// All methods take `&self`; the view is meant to be shared as an
/// `Arc<BoardView>` between the event handlers that drive it. Mutations
/// that race a reload are discarded: each mutation remembers the view
/// generation it started from, and a reload bumps the generation, so a
/// response that arrives for a replaced list never touches it.
pub struct BoardView {
    project_id: ProjectId,
    task_service: Arc<dyn TaskService>,
    user_service: Arc<dyn UserService>,
    tasks: RwLock<Vec<Task>>,
    users: RwLock<Vec<User>>,
    generation: AtomicU64,
    /// One slot per task id; holding a slot serializes status changes so
    /// overlapping drags on the same card cannot race each other.
    change_slots: Mutex<HashMap<TaskId, Arc<Mutex<()>>>>,
}

impl BoardView {
    /// Create an empty view for the project. Call [`load`](Self::load)
    /// before rendering.
    pub fn new(
        project_id: ProjectId,
        task_service: Arc<dyn TaskService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            project_id,
            task_service,
            user_service,
            tasks: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            generation: AtomicU64::new(0),
            change_slots: Mutex::new(HashMap::new()),
        }
    }

    /// The project this view renders
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Fetch the project's tasks and the user roster, replacing the view
    /// wholesale. A failure of either fetch leaves the previous state in
    /// place for the caller's retry affordance.
    pub async fn load(&self) -> Result<()> {
        let (tasks, users) = tokio::try_join!(
            self.task_service.get_by_project(self.project_id),
            self.user_service.get_all(),
        )
        .map_err(|source| BoardError::Load { source })?;

        let mut task_slot = self.tasks.write().await;
        let mut user_slot = self.users.write().await;
        *task_slot = tasks;
        *user_slot = users;
        self.generation.fetch_add(1, Ordering::AcqRel);
        debug!(project = %self.project_id, tasks = task_slot.len(), "board loaded");
        Ok(())
    }

    /// Snapshot of the in-view task list, in source order
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Snapshot of the user roster
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// The in-view tasks bucketed into board columns
    pub async fn columns(&self) -> Columns {
        partition_by_status(&self.tasks.read().await)
    }

    /// Apply a drag-drop status change.
    ///
    /// Dropping a card on the column it is already in does nothing and
    /// issues no request. Otherwise the in-view copy flips immediately;
    /// if the store then rejects the update, the whole list is reloaded
    /// from the store and the change surfaces as
    /// [`BoardError::UpdateFailed`].
    pub async fn apply_status_change(
        &self,
        task_id: TaskId,
        target: Status,
    ) -> Result<StatusChange> {
        let slot = self.change_slot(task_id).await;
        let _serialized = slot.lock().await;

        let current = {
            let tasks = self.tasks.read().await;
            tasks.iter().find(|t| t.id == task_id).map(|t| t.status)
        };
        let current = current.ok_or(BoardError::UnknownTask { id: task_id })?;
        if current == target {
            return Ok(StatusChange::Unchanged);
        }

        let generation = self.generation.load(Ordering::Acquire);

        {
            let mut tasks = self.tasks.write().await;
            if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
                task.status = target;
            }
        }
        debug!(task = %task_id, from = %current, to = %target, "status change applied optimistically");

        match self
            .task_service
            .update(task_id, TaskPatch::new().with_status(target))
            .await
        {
            Ok(canonical) => {
                self.merge_if_current(generation, canonical).await;
                Ok(StatusChange::Applied)
            }
            Err(source) => {
                warn!(task = %task_id, error = %source, "status update rejected, reloading from store");
                if self.generation.load(Ordering::Acquire) == generation {
                    if let Err(reload) = self.load().await {
                        warn!(error = %reload, "reload after rejected update failed, keeping stale view");
                    }
                }
                Err(BoardError::UpdateFailed { source })
            }
        }
    }

    /// Create a task in this project and merge the canonical record into
    /// the view. The project id always comes from the view, whatever the
    /// form submitted.
    pub async fn create_task(&self, mut fields: NewTask) -> Result<Task> {
        fields.project_id = self.project_id;
        let generation = self.generation.load(Ordering::Acquire);

        let created = self
            .task_service
            .create(fields)
            .await
            .map_err(|source| BoardError::Save { source })?;

        self.merge_if_current(generation, created.clone()).await;
        Ok(created)
    }

    /// Update a task through the edit form and merge the canonical record
    /// into the view. A rejection leaves the view untouched.
    pub async fn update_task(&self, task_id: TaskId, patch: TaskPatch) -> Result<Task> {
        let generation = self.generation.load(Ordering::Acquire);

        let updated = self
            .task_service
            .update(task_id, patch)
            .await
            .map_err(|source| BoardError::Save { source })?;

        self.merge_if_current(generation, updated.clone()).await;
        Ok(updated)
    }

    /// Replace the task if it is in view, append it otherwise. Checked
    /// against the generation the request started from while holding the
    /// list lock, so a response that lost a reload race is dropped whole.
    async fn merge_if_current(&self, generation: u64, canonical: Task) {
        let mut tasks = self.tasks.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            debug!(task = %canonical.id, "discarding response for a replaced view");
            return;
        }
        match tasks.iter_mut().find(|t| t.id == canonical.id) {
            Some(task) => *task = canonical,
            None => tasks.push(canonical),
        }
    }

    async fn change_slot(&self, task_id: TaskId) -> Arc<Mutex<()>> {
        let mut slots = self.change_slots.lock().await;
        slots
            .entry(task_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowboard_store::{demo_stores, Latency};

    async fn loaded_view() -> BoardView {
        let stores = demo_stores(Latency::none());
        let view = BoardView::new(ProjectId::new(1), stores.tasks, stores.users);
        view.load().await.unwrap();
        view
    }

    #[tokio::test]
    async fn test_load_replaces_view_wholesale() {
        let view = loaded_view().await;
        assert_eq!(view.tasks().await.len(), 5);
        assert_eq!(view.users().await.len(), 4);

        // Reloading does not accumulate
        view.load().await.unwrap();
        assert_eq!(view.tasks().await.len(), 5);
    }

    #[tokio::test]
    async fn test_columns_cover_the_view() {
        let view = loaded_view().await;
        let columns = view.columns().await;
        assert_eq!(columns.len(), view.tasks().await.len());
    }

    #[tokio::test]
    async fn test_same_column_drop_is_a_noop() {
        let view = loaded_view().await;
        let before = view.tasks().await;
        let target = before[0].id;
        let status = before[0].status;

        let outcome = view.apply_status_change(target, status).await.unwrap();
        assert_eq!(outcome, StatusChange::Unchanged);

        // Nothing moved and nothing was stamped
        let after = view.tasks().await;
        assert_eq!(after[0].updated_at, before[0].updated_at);
    }

    #[tokio::test]
    async fn test_status_change_applies() {
        let view = loaded_view().await;
        let target = view.columns().await.todo[0].id;

        let outcome = view
            .apply_status_change(target, Status::Done)
            .await
            .unwrap();
        assert_eq!(outcome, StatusChange::Applied);

        let task = view
            .tasks()
            .await
            .into_iter()
            .find(|t| t.id == target)
            .unwrap();
        assert_eq!(task.status, Status::Done);
    }

    #[tokio::test]
    async fn test_unknown_task_is_rejected_up_front() {
        let view = loaded_view().await;
        let err = view
            .apply_status_change(TaskId::new(999), Status::Done)
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::UnknownTask { .. }));
    }

    #[tokio::test]
    async fn test_create_goes_into_this_project() {
        let view = loaded_view().await;

        // The form claims another project; the view pins its own
        let created = view
            .create_task(NewTask::new(ProjectId::new(7), "Stray task"))
            .await
            .unwrap();
        assert_eq!(created.project_id, view.project_id());

        let tasks = view.tasks().await;
        assert_eq!(tasks.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let view = loaded_view().await;
        let before = view.tasks().await;
        let target = before[1].id;

        view.update_task(target, TaskPatch::new().with_title("Renamed"))
            .await
            .unwrap();

        let after = view.tasks().await;
        assert_eq!(after.len(), before.len());
        assert_eq!(after[1].id, target);
        assert_eq!(after[1].title, "Renamed");
    }
}
