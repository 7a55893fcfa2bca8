//! Timeline geometry
//!
//! Pure view-model output: horizontal bar positions from due dates and
//! arrow endpoints from dependencies. Vertical placement comes from a
//! per-task anchor map built over the rendered order, so the layout must
//! be rebuilt whenever filtering or sorting changes that order, not just
//! when dates change.

use super::bounds::TimelineBounds;
use flowboard_store::{Dependency, DependencyId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Width of a task bar. Fixed, not data-derived.
pub const BAR_WIDTH: f32 = 120.0;

/// Height of a task row, bar and label included
pub const ROW_HEIGHT: f32 = 60.0;

/// Fractional horizontal offset of a task bar within the bounds.
///
/// `None` when the task has no due date; the caller renders the row
/// without a bar. The value is not clamped: due dates inside the bounds
/// land in [0, 1] by construction, and anything else is the caller's
/// concern.
pub fn bar_offset(task: &Task, bounds: &TimelineBounds) -> Option<f64> {
    let due = task.due_date?;
    Some((due - bounds.start).num_days() as f64 / bounds.span_days() as f64)
}

/// A point in chart space, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A renderable task bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub task_id: TaskId,
    /// Index of the task's row in the rendered order
    pub row: usize,
    /// Left edge in pixels
    pub left: f32,
    pub width: f32,
}

/// A renderable dependency arrow, tail at the predecessor bar's right
/// edge, head at the successor bar's left edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub dependency_id: DependencyId,
    pub tail: Point,
    pub head: Point,
}

/// Geometry for one rendering of the timeline.
///
/// Built over the rendered task order. Every task occupies a row and gets
/// a vertical anchor; only tasks with a due date get a bar.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    bars: Vec<Bar>,
    lefts: HashMap<TaskId, f32>,
    anchors: HashMap<TaskId, f32>,
}

impl TimelineLayout {
    /// Lay out the tasks over a chart of the given pixel width
    pub fn new(tasks: &[Task], bounds: &TimelineBounds, chart_width: f32) -> Self {
        let mut bars = Vec::new();
        let mut lefts = HashMap::new();
        let mut anchors = HashMap::new();

        for (row, task) in tasks.iter().enumerate() {
            anchors.insert(task.id, row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0);

            if let Some(offset) = bar_offset(task, bounds) {
                let left = offset as f32 * chart_width;
                bars.push(Bar {
                    task_id: task.id,
                    row,
                    left,
                    width: BAR_WIDTH,
                });
                lefts.insert(task.id, left);
            }
        }

        Self {
            bars,
            lefts,
            anchors,
        }
    }

    /// The bars to render, in row order
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Vertical center of a task's row, if the task is rendered
    pub fn anchor(&self, task_id: TaskId) -> Option<f32> {
        self.anchors.get(&task_id).copied()
    }

    /// Route one dependency arrow.
    ///
    /// `None` when either end is not rendered or has no bar; a dangling
    /// dependency draws nothing and is never an error.
    pub fn route_arrow(&self, dependency: &Dependency) -> Option<Arrow> {
        let tail_left = *self.lefts.get(&dependency.predecessor_id)?;
        let head_left = *self.lefts.get(&dependency.successor_id)?;
        let tail_y = *self.anchors.get(&dependency.predecessor_id)?;
        let head_y = *self.anchors.get(&dependency.successor_id)?;

        Some(Arrow {
            dependency_id: dependency.id,
            tail: Point {
                x: tail_left + BAR_WIDTH,
                y: tail_y,
            },
            head: Point {
                x: head_left,
                y: head_y,
            },
        })
    }

    /// Route every resolvable arrow, skipping the rest
    pub fn arrows(&self, dependencies: &[Dependency]) -> Vec<Arrow> {
        dependencies
            .iter()
            .filter_map(|dependency| self.route_arrow(dependency))
            .collect()
    }
}
