//! Board state and timeline layout engines for the Flowboard project
//! tracker
//!
//! Two pure view-state engines over the `flowboard-store` collaborators:
//!
//! - **Board** - partitions one project's tasks into To Do / In Progress /
//!   Done columns and applies drag-drop status changes optimistically,
//!   reconciling against the store with a full reload when an update is
//!   rejected.
//! - **Timeline** - maps due dates onto a month-aligned date window and
//!   routes dependency arrows between task rows.
//!
//! Both emit plain data (column buckets, bar and arrow coordinates) and
//! leave rendering, routing, and notification display to the caller.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use flowboard::{BoardView, TimelineBounds, TimelineLayout};
//! use flowboard_store::{demo_stores, Latency, ProjectId, Status};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stores = demo_stores(Latency::simulated());
//! let board = BoardView::new(ProjectId::new(1), stores.tasks, stores.users);
//! board.load().await?;
//!
//! // Drag a card from To Do to Done
//! let card = board.columns().await.todo[0].id;
//! board.apply_status_change(card, Status::Done).await?;
//!
//! // Lay out the timeline for the same tasks
//! let tasks = board.tasks().await;
//! if let Some(bounds) = TimelineBounds::from_tasks(&tasks) {
//!     let layout = TimelineLayout::new(&tasks, &bounds, 960.0);
//!     println!("{} bars", layout.bars().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
mod error;
pub mod timeline;

pub use board::{
    partition_by_status, search_projects, BoardView, Columns, StatusChange, TaskFilter,
};
pub use error::{BoardError, Result};
pub use timeline::{
    bar_offset, Arrow, Bar, Point, TimelineBounds, TimelineLayout, BAR_WIDTH, ROW_HEIGHT,
};
