use crate::{
    ApiError, AppState, add_project, add_sprint, add_task, change_wasted_hours, delete_task,
    health, list_tasks,
};

use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use error_location::ErrorLocation;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/project", post(add_project))
        .route("/sprint/{projectId}", post(add_sprint))
        // One pattern for both id kinds: POST/GET take a sprint id, PATCH/DELETE a task id
        .route(
            "/task/{id}",
            post(add_task)
                .get(list_tasks)
                .patch(change_wasted_hours)
                .delete(delete_task),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
}

/// Turns a handler panic into a 500 JSON response.
pub(crate) fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response>
{
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    log::error!("Handler panicked: {}", detail);

    ApiError::Internal {
        message: "Internal server error".to_string(),
        location: ErrorLocation::from(std::panic::Location::caller()),
    }
    .into_response()
}
