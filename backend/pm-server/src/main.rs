use pm_server::error::{Result as ServerErrorResult, ServerError};
use pm_server::{AppState, build_router, logger};

use pm_auth::JwtValidator;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool + migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = pm_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let jwt_validator = Arc::new(JwtValidator::with_hs256(config.auth.secret_bytes()));
    info!("JWT: {} validation enabled", jwt_validator.algorithm());

    let app_state = AppState {
        pool: pool.clone(),
        jwt_validator,
        validation: config.validation.clone(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Io {
            context: format!("Failed to bind {bind_addr}"),
            source: e,
        })?;

    // Actual bound address (port 0 is auto-assigned)
    let actual_addr = listener.local_addr().map_err(|e| ServerError::Io {
        context: "Failed to read bound address".to_string(),
        source: e,
    })?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Io {
            context: "Server error".to_string(),
            source: e,
        })?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
