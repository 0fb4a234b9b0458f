pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    projects::{
        create_project_request::{CreateProjectRequest, NewProject},
        project_response::ProjectResponse,
        projects::add_project,
    },
    sprints::{
        create_sprint_request::{CreateSprintRequest, NewSprint},
        sprint_response::SprintResponse,
        sprints::add_sprint,
    },
    tasks::{
        change_hours_response::ChangeHoursResponse,
        create_task_request::{CreateTaskRequest, NewTask},
        list_tasks_query::ListTasksQuery,
        task_dto::TaskDto,
        tasks::{add_task, change_wasted_hours, delete_task, list_tasks},
        update_task_hours_request::{HoursChange, UpdateTaskHoursRequest},
    },
};
pub use state::AppState;

pub use crate::routes::build_router;
