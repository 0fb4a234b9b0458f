//! Resolution of path identifiers to entities the caller owns.
//!
//! Ownership is transitive through the user's project list:
//! project -> sprint (via `project_id`) -> task (via the sprint's task list).
//! A missing entity and one owned by someone else produce the same
//! `NotFound`, so callers cannot probe for other users' ids.

use crate::{ApiError, ApiResult};

use pm_core::{Sprint, Task, User};
use pm_db::{ProjectRepository, SprintRepository, TaskRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const SPRINT_NOT_FOUND: &str = "Sprint not found";
pub const TASK_NOT_FOUND: &str = "Task not found";

/// The project must exist and appear in the user's project list.
pub async fn ensure_project_owned(
    pool: &SqlitePool,
    user: &User,
    project_id: Uuid,
) -> ApiResult<()> {
    // Membership first; it needs no query
    if !user.owns_project(project_id) {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    if !ProjectRepository::new(pool.clone()).exists(project_id).await? {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    Ok(())
}

/// Load a sprint whose project the user owns.
pub async fn owned_sprint(pool: &SqlitePool, user: &User, sprint_id: Uuid) -> ApiResult<Sprint> {
    SprintRepository::new(pool.clone())
        .find_by_id(sprint_id)
        .await?
        .filter(|sprint| user.owns_project(sprint.project_id))
        .ok_or_else(|| ApiError::not_found(SPRINT_NOT_FOUND))
}

/// Load a task together with its parent sprint, both owned by the user.
pub async fn owned_task(pool: &SqlitePool, user: &User, task_id: Uuid) -> ApiResult<(Sprint, Task)> {
    let task = TaskRepository::new(pool.clone())
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))?;

    let sprint = SprintRepository::new(pool.clone())
        .find_by_task(task_id)
        .await?
        .filter(|sprint| user.owns_project(sprint.project_id))
        .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))?;

    Ok((sprint, task))
}
