//! In-memory task store

use crate::error::{Result, StoreError};
use crate::latency::{pause, Latency};
use crate::service::TaskService;
use crate::types::{NewTask, ProjectId, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory task table with simulated latency
pub struct TaskStore {
    latency: Latency,
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_tasks(latency, Vec::new())
    }

    /// Create a store pre-populated with the given tasks
    pub fn with_tasks(latency: Latency, tasks: Vec<Task>) -> Self {
        Self {
            latency,
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskService for TaskStore {
    async fn get_all(&self) -> Result<Vec<Task>> {
        pause(self.latency.list).await;
        Ok(self.tasks.read().await.clone())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task> {
        pause(self.latency.fetch).await;
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("task", id))
    }

    async fn get_by_project(&self, project_id: ProjectId) -> Result<Vec<Task>> {
        pause(self.latency.list).await;
        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create(&self, fields: NewTask) -> Result<Task> {
        pause(self.latency.create).await;
        let now = Utc::now();
        let mut tasks = self.tasks.write().await;
        let task = Task {
            id: TaskId::new(super::next_id(tasks.iter().map(|t| t.id.get()))),
            project_id: fields.project_id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            assignee_id: fields.assignee_id,
            due_date: fields.due_date,
            tags: fields.tags,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        tasks.push(task.clone());
        tracing::debug!(task = %task.id, project = %task.project_id, "task created");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        pause(self.latency.update).await;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("task", id))?;
        patch.apply(task);
        task.updated_at = Utc::now();
        tracing::debug!(task = %id, "task updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        pause(self.latency.delete).await;
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("task", id))?;
        tasks.remove(index);
        tracing::debug!(task = %id, "task deleted");
        Ok(())
    }
}
