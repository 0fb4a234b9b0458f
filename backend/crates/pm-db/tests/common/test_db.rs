use pm_core::{Project, Sprint, Task, User};
use pm_db::{ProjectRepository, SprintRepository, TaskRepository, UserRepository};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    pm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn insert_user(pool: &SqlitePool, user: &User) {
    UserRepository::new(pool.clone())
        .create(user)
        .await
        .expect("Failed to create test user");
}

/// Inserts a project and attaches it to `owner`
pub async fn insert_project(pool: &SqlitePool, owner: &User, project: &Project) {
    ProjectRepository::create(pool, project)
        .await
        .expect("Failed to create test project");
    UserRepository::append_project(pool, owner.id, project.id)
        .await
        .expect("Failed to attach test project");
}

/// Inserts a sprint and attaches it to its project
pub async fn insert_sprint(pool: &SqlitePool, sprint: &Sprint) {
    SprintRepository::create(pool, sprint)
        .await
        .expect("Failed to create test sprint");
    ProjectRepository::append_sprint(pool, sprint.project_id, sprint.id)
        .await
        .expect("Failed to attach test sprint");
}

/// Inserts a task and attaches it to `sprint`
pub async fn insert_task(pool: &SqlitePool, sprint: &Sprint, task: &Task) {
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    TaskRepository::create(&mut *tx, task)
        .await
        .expect("Failed to create test task");
    SprintRepository::append_task(&mut *tx, sprint.id, task.id)
        .await
        .expect("Failed to attach test task");
    tx.commit().await.expect("Failed to commit test task");
}
