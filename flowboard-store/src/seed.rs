//! Seeded demo data
//!
//! A small cross-referenced data set standing in for a real backend:
//! two projects, a four-person team, tasks with due dates spanning two
//! months, a comment thread, and a dependency chain that includes one
//! deliberately dangling pair.

use crate::latency::Latency;
use crate::memory::{CommentStore, DependencyStore, ProjectStore, TaskStore, UserStore};
use crate::types::{
    Comment, CommentId, Dependency, DependencyId, Priority, Project, ProjectId, ProjectStatus,
    Role, Status, Task, TaskId, User, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

/// One store handle per entity table, ready to inject into consumers
pub struct DemoStores {
    pub projects: Arc<ProjectStore>,
    pub tasks: Arc<TaskStore>,
    pub users: Arc<UserStore>,
    pub comments: Arc<CommentStore>,
    pub dependencies: Arc<DependencyStore>,
}

/// Build the demo data set behind stores with the given latency
pub fn demo_stores(latency: Latency) -> DemoStores {
    let now = Utc::now();
    DemoStores {
        projects: Arc::new(ProjectStore::with_projects(latency, projects(now))),
        tasks: Arc::new(TaskStore::with_tasks(latency, tasks(now))),
        users: Arc::new(UserStore::with_users(latency, users(now))),
        comments: Arc::new(CommentStore::with_comments(latency, comments(now))),
        dependencies: Arc::new(DependencyStore::with_dependencies(latency, dependencies(now))),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn users(now: DateTime<Utc>) -> Vec<User> {
    let user = |id: i64, name: &str, email: &str, role: Role| User {
        id: UserId::new(id),
        name: name.into(),
        email: email.into(),
        role,
        avatar: None,
        created_at: now,
        updated_at: now,
    };
    vec![
        user(1, "Sarah Chen", "sarah@flowboard.dev", Role::Admin),
        user(2, "Marcus Webb", "marcus@flowboard.dev", Role::Member),
        user(3, "Priya Patel", "priya@flowboard.dev", Role::Member),
        user(4, "Tom Okafor", "tom@flowboard.dev", Role::Member),
    ]
}

fn projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new(1),
            name: "Website Relaunch".into(),
            description: "Rebuild the marketing site on the new design system".into(),
            status: ProjectStatus::Active,
            progress: 45,
            member_ids: vec![UserId::new(1), UserId::new(2), UserId::new(3)],
            created_at: now,
            updated_at: now,
        },
        Project {
            id: ProjectId::new(2),
            name: "Mobile App".into(),
            description: "Companion app for iOS and Android".into(),
            status: ProjectStatus::Active,
            progress: 20,
            member_ids: vec![UserId::new(1), UserId::new(4)],
            created_at: now,
            updated_at: now,
        },
    ]
}

fn tasks(now: DateTime<Utc>) -> Vec<Task> {
    let task = |id: i64, project: i64, title: &str| Task {
        id: TaskId::new(id),
        project_id: ProjectId::new(project),
        title: title.into(),
        description: String::new(),
        status: Status::Todo,
        priority: Priority::Medium,
        assignee_id: None,
        due_date: None,
        tags: String::new(),
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    vec![
        Task {
            status: Status::Done,
            priority: Priority::High,
            assignee_id: Some(UserId::new(2)),
            due_date: Some(date(2024, 3, 5)),
            tags: "design, web".into(),
            ..task(1, 1, "Design homepage hero")
        },
        Task {
            status: Status::InProgress,
            assignee_id: Some(UserId::new(3)),
            due_date: Some(date(2024, 3, 18)),
            tags: "frontend".into(),
            comments: comments(now),
            ..task(2, 1, "Build component library")
        },
        Task {
            due_date: Some(date(2024, 4, 2)),
            tags: "content".into(),
            ..task(3, 1, "Migrate blog content")
        },
        Task {
            priority: Priority::High,
            assignee_id: Some(UserId::new(1)),
            due_date: Some(date(2024, 4, 20)),
            tags: "ops, launch".into(),
            ..task(4, 1, "Run the launch checklist")
        },
        // No due date: shows on the board but never on the timeline
        Task {
            priority: Priority::Low,
            ..task(5, 1, "Collect retro notes")
        },
        Task {
            priority: Priority::Low,
            assignee_id: Some(UserId::new(4)),
            due_date: Some(date(2024, 4, 28)),
            tags: "store".into(),
            ..task(6, 2, "Produce app store screenshots")
        },
    ]
}

fn comments(now: DateTime<Utc>) -> Vec<Comment> {
    vec![
        Comment {
            id: CommentId::new(1),
            task_id: TaskId::new(2),
            author_id: UserId::new(1),
            body: "Design tokens are final, safe to build against them.".into(),
            created_at: now,
            updated_at: now,
        },
        Comment {
            id: CommentId::new(2),
            task_id: TaskId::new(2),
            author_id: UserId::new(3),
            body: "Buttons and form fields are done, cards are next.".into(),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn dependencies(now: DateTime<Utc>) -> Vec<Dependency> {
    let pair = |id: i64, predecessor: i64, successor: i64| Dependency {
        id: DependencyId::new(id),
        predecessor_id: TaskId::new(predecessor),
        successor_id: TaskId::new(successor),
        created_at: now,
        updated_at: now,
    };
    vec![
        pair(1, 1, 2),
        pair(2, 2, 3),
        pair(3, 3, 4),
        // Dangling on purpose: task 99 does not exist, so no arrow renders
        pair(4, 99, 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{DependencyService, TaskService, UserService};

    #[tokio::test]
    async fn test_seed_is_cross_referenced() {
        let stores = demo_stores(Latency::none());

        let tasks = stores.tasks.get_by_project(ProjectId::new(1)).await.unwrap();
        assert_eq!(tasks.len(), 5);

        let users = stores.users.get_all().await.unwrap();
        for task in &tasks {
            if let Some(assignee) = task.assignee_id {
                assert!(users.iter().any(|u| u.id == assignee));
            }
        }
    }

    #[tokio::test]
    async fn test_seed_contains_a_dangling_dependency() {
        let stores = demo_stores(Latency::none());
        let tasks = stores.tasks.get_all().await.unwrap();
        let dependencies = stores.dependencies.get_all().await.unwrap();

        let dangling: Vec<_> = dependencies
            .iter()
            .filter(|d| !tasks.iter().any(|t| t.id == d.predecessor_id))
            .collect();
        assert_eq!(dangling.len(), 1);
    }

    #[tokio::test]
    async fn test_seed_due_dates_span_two_months() {
        let stores = demo_stores(Latency::none());
        let tasks = stores.tasks.get_all().await.unwrap();

        let mut months: Vec<u32> = tasks
            .iter()
            .filter_map(|t| t.due_date)
            .map(|d| chrono::Datelike::month(&d))
            .collect();
        months.sort_unstable();
        months.dedup();
        assert!(months.len() >= 2);
    }
}
