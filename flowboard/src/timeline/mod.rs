//! Timeline layout engine
//!
//! Turns a task list and a dependency list into renderable geometry: a
//! shared date window, one bar per dated task, and arrows between
//! dependent rows.

mod bounds;
mod layout;

pub use bounds::TimelineBounds;
pub use layout::{bar_offset, Arrow, Bar, Point, TimelineLayout, BAR_WIDTH, ROW_HEIGHT};
