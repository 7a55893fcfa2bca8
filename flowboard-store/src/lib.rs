//! Entity model and mock data services for the Flowboard project tracker
//!
//! This crate is the collaborator side of the system: the entity types
//! (projects, tasks, users, comments, task dependencies), the per-entity
//! service contracts, and in-memory implementations that simulate network
//! latency. The view engines in the `flowboard` crate consume these
//! through `Arc<dyn ...Service>` handles and never own the data.
//!
//! ## Overview
//!
//! - **Typed ids** - server-assigned integers, strictly increasing per table
//! - **Closed enums** - status, priority, and role reject unknown wire
//!   values when entities are read in
//! - **Typed patches** - updates carry only the fields they change; the
//!   store merges them and stamps `updated_at`
//! - **Injected stores** - repositories are constructed at session start
//!   and passed to consumers, there is no ambient global state
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use flowboard_store::{demo_stores, Latency, NewTask, ProjectId, TaskService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stores = demo_stores(Latency::simulated());
//!
//! let task = stores
//!     .tasks
//!     .create(NewTask::new(ProjectId::new(1), "Write the launch post"))
//!     .await?;
//!
//! println!("created task {}", task.id);
//! # Ok(())
//! # }
//! ```

mod error;
mod latency;

pub mod memory;
pub mod seed;
pub mod service;
pub mod types;

pub use error::{Result, StoreError};
pub use latency::Latency;
pub use seed::{demo_stores, DemoStores};
pub use service::{
    CommentService, DependencyService, ProjectService, TaskService, UserService,
};

// Re-export commonly used types
pub use types::{
    Comment, CommentId, CommentPatch, Dependency, DependencyId, DependencyPatch, NewComment,
    NewDependency, NewProject, NewTask, NewUser, Priority, Project, ProjectId, ProjectPatch,
    ProjectStatus, Role, Status, Task, TaskId, TaskPatch, User, UserId, UserPatch,
};
