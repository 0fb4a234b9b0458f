
use crate::AppState;

use pm_auth::{Claims, JwtValidator};
use pm_config::ValidationConfig;
use pm_core::{Session, User};
use pm_db::{SessionRepository, UserRepository};

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-at-least-32-bytes!";

pub(crate) async fn create_test_state() -> AppState {
    let pool = pm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState {
        pool,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        validation: ValidationConfig::default(),
    }
}

/// Persist a user with one session and return a bearer token for it.
pub(crate) async fn create_logged_in_user(state: &AppState) -> (User, String) {
    let user = User::new(format!("{}@test.local", Uuid::new_v4()));
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .unwrap();

    let session = Session::new(user.id);
    SessionRepository::new(state.pool.clone())
        .create(&session)
        .await
        .unwrap();

    let token = mint_token(&user.id.to_string(), &session.id.to_string(), 3600);
    (user, token)
}

pub(crate) fn mint_token(sub: &str, sid: &str, ttl_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        sid: sid.to_string(),
        exp: now + ttl_secs,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}
