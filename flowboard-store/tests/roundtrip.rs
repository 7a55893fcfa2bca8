//! Round-trip behavior of the mock services: what create and update return
//! is exactly what a later fetch sees.

use flowboard_store::{
    demo_stores, CommentService, Latency, NewComment, NewProject, NewTask, NewUser,
    ProjectService, ProjectStatus, Role, Status, TaskPatch, TaskService, UserService,
};

#[tokio::test]
async fn created_task_reads_back_identically() {
    let stores = demo_stores(Latency::none());

    let created = stores
        .tasks
        .create(
            NewTask::new(flowboard_store::ProjectId::new(1), "Draft launch email")
                .with_tags("marketing, email"),
        )
        .await
        .unwrap();

    let fetched = stores.tasks.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_is_visible_to_the_next_fetch() {
    let stores = demo_stores(Latency::none());
    let tasks = stores.tasks.get_all().await.unwrap();
    let target = tasks[0].id;

    let updated = stores
        .tasks
        .update(target, TaskPatch::new().with_status(Status::InProgress))
        .await
        .unwrap();
    assert_eq!(updated.status, Status::InProgress);

    let fetched = stores.tasks.get_by_id(target).await.unwrap();
    assert_eq!(fetched.status, Status::InProgress);
    assert_eq!(fetched.updated_at, updated.updated_at);
}

#[tokio::test]
async fn delete_makes_the_id_unfetchable() {
    let stores = demo_stores(Latency::none());
    let project = stores.projects.create(NewProject::new("Scratch")).await.unwrap();

    stores.projects.delete(project.id).await.unwrap();
    assert!(stores
        .projects
        .get_by_id(project.id)
        .await
        .unwrap_err()
        .is_not_found());

    // A second delete of the same id is a not-found, not a success
    assert!(stores
        .projects
        .delete(project.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn ids_keep_increasing_past_the_seed() {
    let stores = demo_stores(Latency::none());

    let before = stores.users.get_all().await.unwrap();
    let top = before.iter().map(|u| u.id).max().unwrap();

    let invited = stores
        .users
        .create(NewUser::new("New Hire", "hire@flowboard.dev").with_role(Role::Member))
        .await
        .unwrap();
    assert!(invited.id > top);
}

#[tokio::test]
async fn project_create_defaults_then_progress_update() {
    let stores = demo_stores(Latency::none());

    let project = stores
        .projects
        .create(NewProject::new("Q3 Audit").with_description("Compliance pass"))
        .await
        .unwrap();
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.progress, 0);

    let updated = stores
        .projects
        .update(
            project.id,
            flowboard_store::ProjectPatch::new().with_progress(10),
        )
        .await
        .unwrap();
    assert_eq!(updated.progress, 10);
    assert!(updated.updated_at >= project.updated_at);
}

#[tokio::test]
async fn comment_thread_grows_at_the_end() {
    let stores = demo_stores(Latency::none());
    let task = flowboard_store::TaskId::new(2);

    let before = stores.comments.get_by_task(task).await.unwrap();
    let posted = stores
        .comments
        .create(NewComment::new(
            task,
            flowboard_store::UserId::new(2),
            "Cards are merged.",
        ))
        .await
        .unwrap();

    let after = stores.comments.get_by_task(task).await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap(), &posted);
}
