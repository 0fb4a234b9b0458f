use crate::tests::{create_logged_in_user, create_test_state, mint_token};
use crate::{ApiError, ApiResult, AppState, CurrentUser};

use axum::extract::FromRequestParts;
use axum::http::{Request, header::AUTHORIZATION};
use googletest::prelude::*;
use uuid::Uuid;

async fn extract(state: &AppState, authorization: Option<&str>) -> ApiResult<CurrentUser> {
    let mut builder = Request::builder().uri("/project");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    CurrentUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn given_valid_token_when_extracted_then_returns_session_owner() {
    let state = create_test_state().await;
    let (user, token) = create_logged_in_user(&state).await;

    let CurrentUser(current) = extract(&state, Some(&format!("Bearer {token}")))
        .await
        .unwrap();

    assert_that!(current.id, eq(user.id));
    assert_that!(current.email, eq(&user.email));
}

#[tokio::test]
async fn given_no_header_when_extracted_then_token_not_provided() {
    let state = create_test_state().await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::TokenNotProvided { .. })));
}

#[tokio::test]
async fn given_bare_bearer_when_extracted_then_token_not_provided() {
    let state = create_test_state().await;

    let result = extract(&state, Some("Bearer ")).await;

    assert!(matches!(result, Err(ApiError::TokenNotProvided { .. })));
}

#[tokio::test]
async fn given_garbage_token_when_extracted_then_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, Some("Bearer not.a.jwt")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_basic_scheme_when_extracted_then_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_expired_token_when_extracted_then_unauthorized() {
    let state = create_test_state().await;
    let (user, _) = create_logged_in_user(&state).await;
    let token = mint_token(&user.id.to_string(), &Uuid::new_v4().to_string(), -3600);

    let result = extract(&state, Some(&format!("Bearer {token}"))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_unknown_session_when_extracted_then_not_found() {
    let state = create_test_state().await;
    let (user, _) = create_logged_in_user(&state).await;
    let token = mint_token(&user.id.to_string(), &Uuid::new_v4().to_string(), 3600);

    let result = extract(&state, Some(&format!("Bearer {token}"))).await;

    match result {
        Err(ApiError::NotFound { message, .. }) => {
            assert_that!(message, eq("Invalid session"))
        }
        Err(other) => panic!("Expected NotFound, got {other:?}"),
        Ok(_) => panic!("Expected NotFound, got a user"),
    }
}

#[tokio::test]
async fn given_session_of_another_user_when_extracted_then_not_found() {
    let state = create_test_state().await;
    let (_, victim_token) = create_logged_in_user(&state).await;
    let (attacker, _) = create_logged_in_user(&state).await;

    // Reuse the victim's session id under the attacker's subject
    let victim_claims = state.jwt_validator.validate(&victim_token).unwrap();
    let forged = mint_token(&attacker.id.to_string(), &victim_claims.sid, 3600);

    let result = extract(&state, Some(&format!("Bearer {forged}"))).await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
