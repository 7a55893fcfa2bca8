//! Data service contracts
//!
//! One trait per entity family. The in-memory stores in [`crate::memory`]
//! implement them; consumers hold `Arc<dyn ...Service>` handles so tests
//! can substitute failing or scripted backends.
//!
//! Shared semantics:
//! - `get_by_id`, `update`, and `delete` fail with
//!   [`NotFound`](crate::error::StoreError::NotFound) when the id is absent
//! - `create` assigns an id strictly greater than the current maximum,
//!   stamps both timestamps, and returns the canonical record
//! - `update` merges only the fields present in the patch, stamps
//!   `updated_at`, and returns the canonical record

use crate::error::Result;
use crate::types::{
    Comment, CommentId, CommentPatch, Dependency, DependencyId, DependencyPatch, NewComment,
    NewDependency, NewProject, NewTask, NewUser, Project, ProjectId, ProjectPatch, Task, TaskId,
    TaskPatch, User, UserId, UserPatch,
};
use async_trait::async_trait;

/// Project CRUD
#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Project>>;
    async fn get_by_id(&self, id: ProjectId) -> Result<Project>;
    async fn create(&self, fields: NewProject) -> Result<Project>;
    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project>;
    async fn delete(&self, id: ProjectId) -> Result<()>;
}

/// Task CRUD plus the per-project listing the board loads from
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Task>>;
    async fn get_by_id(&self, id: TaskId) -> Result<Task>;
    /// Tasks owned by the project, empty when none match
    async fn get_by_project(&self, project_id: ProjectId) -> Result<Vec<Task>>;
    async fn create(&self, fields: NewTask) -> Result<Task>;
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task>;
    async fn delete(&self, id: TaskId) -> Result<()>;
}

/// User CRUD
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>>;
    async fn get_by_id(&self, id: UserId) -> Result<User>;
    async fn create(&self, fields: NewUser) -> Result<User>;
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User>;
    async fn delete(&self, id: UserId) -> Result<()>;
}

/// Comment CRUD plus the per-task listing the task modal loads from
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Comment>>;
    async fn get_by_id(&self, id: CommentId) -> Result<Comment>;
    /// Comments on the task, in posting order, empty when none match
    async fn get_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>>;
    async fn create(&self, fields: NewComment) -> Result<Comment>;
    async fn update(&self, id: CommentId, patch: CommentPatch) -> Result<Comment>;
    async fn delete(&self, id: CommentId) -> Result<()>;
}

/// Dependency CRUD
#[async_trait]
pub trait DependencyService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Dependency>>;
    async fn get_by_id(&self, id: DependencyId) -> Result<Dependency>;
    async fn create(&self, fields: NewDependency) -> Result<Dependency>;
    async fn update(&self, id: DependencyId, patch: DependencyPatch) -> Result<Dependency>;
    async fn delete(&self, id: DependencyId) -> Result<()>;
}
