//! Column partition

use flowboard_store::{Status, Task};

/// Tasks bucketed into the three board columns.
///
/// Within a column, tasks keep the order of the source list. A task that
/// changes status re-enters its new column at the end on the next
/// partition, since the source list itself is never reordered.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl Columns {
    /// The bucket for a status
    pub fn bucket(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    /// Columns in canonical board order, with their status
    pub fn iter(&self) -> impl Iterator<Item = (Status, &[Task])> + '_ {
        Status::ALL
            .into_iter()
            .map(|status| (status, self.bucket(status)))
    }

    /// Total task count across every column
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Check if every column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition tasks by status. Every task lands in exactly one bucket;
/// status is a closed enum, so there is nothing to drop.
pub fn partition_by_status(tasks: &[Task]) -> Columns {
    let mut columns = Columns::default();
    for task in tasks {
        match task.status {
            Status::Todo => columns.todo.push(task.clone()),
            Status::InProgress => columns.in_progress.push(task.clone()),
            Status::Done => columns.done.push(task.clone()),
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flowboard_store::{Priority, ProjectId, TaskId};

    fn task(id: i64, status: Status) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(id),
            project_id: ProjectId::new(1),
            title: format!("Task {id}"),
            description: String::new(),
            status,
            priority: Priority::Medium,
            assignee_id: None,
            due_date: None,
            tags: String::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_every_task_lands_in_exactly_one_bucket() {
        let tasks = vec![
            task(1, Status::Todo),
            task(2, Status::Done),
            task(3, Status::InProgress),
            task(4, Status::Todo),
        ];

        let columns = partition_by_status(&tasks);
        assert_eq!(columns.len(), tasks.len());

        for t in &tasks {
            let mut homes = 0;
            for (status, bucket) in columns.iter() {
                if bucket.iter().any(|b| b.id == t.id) {
                    homes += 1;
                    assert_eq!(status, t.status);
                }
            }
            assert_eq!(homes, 1);
        }
    }

    #[test]
    fn test_source_order_is_kept_within_a_column() {
        let tasks = vec![
            task(3, Status::Todo),
            task(1, Status::Todo),
            task(2, Status::Done),
        ];

        let columns = partition_by_status(&tasks);
        let todo_ids: Vec<i64> = columns.todo.iter().map(|t| t.id.get()).collect();
        assert_eq!(todo_ids, [3, 1]);
    }

    #[test]
    fn test_empty_board() {
        let columns = partition_by_status(&[]);
        assert!(columns.is_empty());
        assert!(columns.bucket(Status::Done).is_empty());
    }

    #[test]
    fn test_iter_follows_canonical_column_order() {
        let columns = partition_by_status(&[task(1, Status::Done)]);
        let order: Vec<Status> = columns.iter().map(|(s, _)| s).collect();
        assert_eq!(order, Status::ALL);
    }
}
