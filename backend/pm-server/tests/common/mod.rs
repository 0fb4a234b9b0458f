#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_auth::{Claims, JwtValidator};
use pm_config::ValidationConfig;
use pm_core::{Session, User};
use pm_db::{SessionRepository, UserRepository};
use pm_server::{AppState, build_router};

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes-min";

/// A persisted user with a live session.
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = pm_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        validation: ValidationConfig::default(),
    }
}

/// AppState over a database file in `dir`, with a multi-connection pool
pub async fn create_file_backed_app_state(dir: &Path) -> AppState {
    let pool = pm_db::connect(&dir.join("test.db"), 8)
        .await
        .expect("Failed to create test database");

    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        validation: ValidationConfig::default(),
    }
}

/// Create a user plus session and sign a token for it
pub async fn create_test_user(state: &AppState) -> TestUser {
    let user = User::new(format!("{}@test.local", Uuid::new_v4()));
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    let session = Session::new(user.id);
    SessionRepository::new(state.pool.clone())
        .create(&session)
        .await
        .expect("Failed to create test session");

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        sid: session.id.to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token");

    TestUser { id: user.id, token }
}

/// Send one request through a fresh router and decode the JSON body.
///
/// Empty bodies decode to `Value::Null`.
pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, json)
}

/// POST /project, returning the new id
pub async fn create_test_project(state: &AppState, user: &TestUser) -> String {
    let (status, json) = send(
        state,
        Method::POST,
        "/project",
        Some(&user.token),
        Some(serde_json::json!({"title": "Test Project", "description": "A test project"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    json["id"].as_str().unwrap().to_string()
}

/// POST /sprint/{projectId}, returning the new id
pub async fn create_test_sprint(
    state: &AppState,
    user: &TestUser,
    project_id: &str,
    end_date: &str,
    duration: i64,
) -> String {
    let (status, json) = send(
        state,
        Method::POST,
        &format!("/sprint/{project_id}"),
        Some(&user.token),
        Some(serde_json::json!({"title": "Sprint", "endDate": end_date, "duration": duration})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    json["id"].as_str().unwrap().to_string()
}

/// POST /task/{sprintId}, returning the created task body
pub async fn create_test_task(
    state: &AppState,
    user: &TestUser,
    sprint_id: &str,
    title: &str,
) -> Value {
    let (status, json) = send(
        state,
        Method::POST,
        &format!("/task/{sprint_id}"),
        Some(&user.token),
        Some(serde_json::json!({"title": title, "hoursPlanned": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    json
}
