//! Task REST API handlers
//!
//! Tasks live inside a sprint and carry one wasted-hours record per sprint
//! day. Every handler checks ownership through the sprint's project.

use crate::api::ownership::{owned_sprint, owned_task};
use crate::api::validation::path_id;
use crate::{
    AppState, ApiResult, ChangeHoursResponse, CreateTaskRequest, CurrentUser, ListTasksQuery,
    TaskDto, UpdateTaskHoursRequest,
};

use pm_core::Task;
use pm_db::{SprintRepository, TaskRepository};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

/// POST /task/{sprintId}
///
/// Create a task with a zeroed record for every day of the sprint.
pub async fn add_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(sprint_id): Path<String>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskDto>)> {
    let sprint_id = path_id("sprintId", &sprint_id)?;
    let Json(req) = body?;
    let input = req.validate(&state.validation)?;

    let sprint = owned_sprint(&state.pool, &user, sprint_id).await?;
    let task = Task::new(input.title, input.hours_planned, &sprint)?;

    let mut tx = state.pool.begin().await?;
    TaskRepository::create(&mut *tx, &task).await?;
    SprintRepository::append_task(&mut *tx, sprint.id, task.id).await?;
    tx.commit().await?;

    log::info!(
        "Created task {} with {} day(s) in sprint {}",
        task.id,
        task.hours_wasted_per_day.len(),
        sprint.id
    );

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /task/{sprintId}?search=
///
/// Tasks of the sprint in the order they were added, optionally filtered.
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(sprint_id): Path<String>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let sprint_id = path_id("sprintId", &sprint_id)?;
    let Query(query) = query?;

    let sprint = owned_sprint(&state.pool, &user, sprint_id).await?;

    let tasks = TaskRepository::new(state.pool.clone())
        .find_by_sprint(sprint.id)
        .await?;

    let tasks = match query.search.as_deref() {
        Some(search) => tasks
            .into_iter()
            .filter(|t| t.title_matches(search))
            .map(TaskDto::from)
            .collect(),
        None => tasks.into_iter().map(TaskDto::from).collect(),
    };

    Ok(Json(tasks))
}

/// PATCH /task/{taskId}
///
/// Overwrite the wasted hours for one day and return the new total.
pub async fn change_wasted_hours(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
    body: Result<Json<UpdateTaskHoursRequest>, JsonRejection>,
) -> ApiResult<Json<ChangeHoursResponse>> {
    let task_id = path_id("taskId", &task_id)?;
    let Json(req) = body?;
    let change = req.validate()?;

    let (_, mut task) = owned_task(&state.pool, &user, task_id).await?;
    let day = task.record_hours(change.day, change.hours)?;

    // The stored total is authoritative; `task` may predate concurrent updates
    let mut tx = state.pool.begin().await?;
    let new_wasted_hours = TaskRepository::update_day(&mut *tx, task.id, &day).await?;
    tx.commit().await?;

    log::info!(
        "Task {}: {} hour(s) wasted on {}, {} total",
        task.id,
        day.single_hours_wasted,
        day.current_day,
        new_wasted_hours
    );

    Ok(Json(ChangeHoursResponse {
        day,
        new_wasted_hours,
    }))
}

/// DELETE /task/{taskId}
///
/// Remove the task, its day records and its place in the sprint.
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode> {
    let task_id = path_id("taskId", &task_id)?;

    let (sprint, task) = owned_task(&state.pool, &user, task_id).await?;

    let mut tx = state.pool.begin().await?;
    SprintRepository::remove_task(&mut *tx, sprint.id, task.id).await?;
    TaskRepository::delete(&mut *tx, task.id).await?;
    tx.commit().await?;

    log::info!("Deleted task {} from sprint {}", task.id, sprint.id);

    Ok(StatusCode::NO_CONTENT)
}
