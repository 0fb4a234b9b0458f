use pm_auth::JwtValidator;
use pm_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub validation: ValidationConfig,
}
