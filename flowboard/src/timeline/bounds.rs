//! Timeline bounds
//!
//! The visible window is derived from the task set alone: it opens on the
//! first day of the month holding the earliest due date and closes on the
//! last day of the month holding the latest due date plus a 30-day pad,
//! so trailing bars never sit flush against the edge.

use chrono::{Datelike, Days, Months, NaiveDate};
use flowboard_store::Task;
use serde::{Deserialize, Serialize};

/// Half-open date window `[start, end)` shared by every bar and arrow on
/// one timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineBounds {
    /// Derive bounds from the rendered task set.
    ///
    /// Returns `None` when no task carries a due date; the caller renders
    /// the empty state instead of a timeline. Recompute whenever the task
    /// set changes.
    pub fn from_tasks(tasks: &[Task]) -> Option<Self> {
        let mut due_dates = tasks.iter().filter_map(|task| task.due_date);
        let first = due_dates.next()?;
        let (earliest, latest) = due_dates.fold((first, first), |(lo, hi), date| {
            (lo.min(date), hi.max(date))
        });

        let padded = latest + Days::new(30);
        Some(Self {
            start: first_of_month(earliest),
            end: first_of_month(padded) + Months::new(1) - Days::new(1),
        })
    }

    /// Number of days the window spans
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Check if a date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// The calendar days of the window, in order. Restartable; call again
    /// for another pass.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.span_days().max(0) as u64).map(move |offset| start + Days::new(offset))
    }

    /// Every 7th day, for the header labels
    pub fn header_ticks(&self) -> impl Iterator<Item = NaiveDate> {
        self.days().step_by(7)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flowboard_store::{Priority, ProjectId, Status, TaskId};

    fn task_due(id: i64, due: Option<NaiveDate>) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(id),
            project_id: ProjectId::new(1),
            title: format!("Task {id}"),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Medium,
            assignee_id: None,
            due_date: due,
            tags: String::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_due_dates_means_no_bounds() {
        assert_eq!(TimelineBounds::from_tasks(&[]), None);
        assert_eq!(TimelineBounds::from_tasks(&[task_due(1, None)]), None);
    }

    #[test]
    fn test_bounds_snap_to_month_edges_with_pad() {
        let tasks = vec![
            task_due(1, Some(date(2024, 3, 5))),
            task_due(2, None),
            task_due(3, Some(date(2024, 4, 20))),
        ];

        let bounds = TimelineBounds::from_tasks(&tasks).unwrap();
        assert_eq!(bounds.start, date(2024, 3, 1));
        // 2024-04-20 + 30 days = 2024-05-20, so the window closes with May
        assert_eq!(bounds.end, date(2024, 5, 31));
        assert_eq!(bounds.span_days(), 91);
    }

    #[test]
    fn test_single_task_still_gets_a_padded_window() {
        let bounds = TimelineBounds::from_tasks(&[task_due(1, Some(date(2024, 1, 15)))]).unwrap();
        assert_eq!(bounds.start, date(2024, 1, 1));
        // 2024-01-15 + 30 days lands in February
        assert_eq!(bounds.end, date(2024, 2, 29));
    }

    #[test]
    fn test_pad_crosses_year_boundary() {
        let bounds = TimelineBounds::from_tasks(&[task_due(1, Some(date(2023, 12, 20)))]).unwrap();
        assert_eq!(bounds.start, date(2023, 12, 1));
        assert_eq!(bounds.end, date(2024, 1, 31));
    }

    #[test]
    fn test_days_enumerates_the_half_open_window() {
        let bounds = TimelineBounds {
            start: date(2024, 3, 1),
            end: date(2024, 3, 8),
        };

        let days: Vec<NaiveDate> = bounds.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 3, 1));
        assert_eq!(*days.last().unwrap(), date(2024, 3, 7));

        // Restartable
        assert_eq!(bounds.days().count(), 7);
    }

    #[test]
    fn test_header_ticks_step_by_a_week() {
        let bounds = TimelineBounds {
            start: date(2024, 3, 1),
            end: date(2024, 3, 31),
        };

        let ticks: Vec<NaiveDate> = bounds.header_ticks().collect();
        assert_eq!(
            ticks,
            vec![
                date(2024, 3, 1),
                date(2024, 3, 8),
                date(2024, 3, 15),
                date(2024, 3, 22),
                date(2024, 3, 29),
            ]
        );
    }

    #[test]
    fn test_contains() {
        let bounds = TimelineBounds {
            start: date(2024, 3, 1),
            end: date(2024, 5, 31),
        };
        assert!(bounds.contains(date(2024, 3, 1)));
        assert!(bounds.contains(date(2024, 5, 30)));
        assert!(!bounds.contains(date(2024, 5, 31)));
        assert!(!bounds.contains(date(2024, 2, 29)));
    }
}
