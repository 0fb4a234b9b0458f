//! Project REST API handlers

use crate::{AppState, ApiResult, CreateProjectRequest, CurrentUser, ProjectResponse};

use pm_core::Project;
use pm_db::{ProjectRepository, UserRepository};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /project
///
/// Create a project and append it to the caller's project list.
pub async fn add_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let Json(req) = body?;
    let input = req.validate(&state.validation)?;

    let project = Project::new(input.title, input.description);

    let mut tx = state.pool.begin().await?;
    ProjectRepository::create(&mut *tx, &project).await?;
    UserRepository::append_project(&mut *tx, user.id, project.id).await?;
    tx.commit().await?;

    log::info!("Created project {} for user {}", project.id, user.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}
