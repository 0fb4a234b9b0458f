//! Sprint REST API handlers

use crate::api::ownership::ensure_project_owned;
use crate::api::validation::path_id;
use crate::{AppState, ApiResult, CreateSprintRequest, CurrentUser, SprintResponse};

use pm_core::Sprint;
use pm_db::{ProjectRepository, SprintRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /sprint/{projectId}
///
/// Create a sprint ending on `endDate` and lasting `duration` days. The start
/// date is derived. Responds 404 "Project not found" unless the caller owns
/// the project.
pub async fn add_sprint(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<String>,
    body: Result<Json<CreateSprintRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SprintResponse>)> {
    let project_id = path_id("projectId", &project_id)?;
    let Json(req) = body?;
    let input = req.validate(&state.validation)?;

    ensure_project_owned(&state.pool, &user, project_id).await?;

    let sprint = Sprint::new(project_id, input.title, input.end_date, input.duration)?;

    let mut tx = state.pool.begin().await?;
    SprintRepository::create(&mut *tx, &sprint).await?;
    ProjectRepository::append_sprint(&mut *tx, project_id, sprint.id).await?;
    tx.commit().await?;

    log::info!(
        "Created sprint {} ({} - {}) in project {}",
        sprint.id,
        sprint.start_date,
        sprint.end_date,
        project_id
    );

    Ok((StatusCode::CREATED, Json(sprint.into())))
}
