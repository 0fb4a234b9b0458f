//! Axum extractor resolving the bearer token to the calling user

use crate::{ApiError, AppState};

use pm_auth::bearer_token;
use pm_core::User;
use pm_db::{SessionRepository, UserRepository};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

const INVALID_SESSION: &str = "Invalid session";

/// The authenticated user, with the ids of the projects they own.
///
/// Resolution: `Authorization: Bearer <jwt>` -> claims (`sub`, `sid`) ->
/// session row -> user row. The session must belong to `sub`.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(value.to_str().map_err(|_| ApiError::Unauthorized {
                    reason: "Authorization header is not valid ASCII".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?),
                None => None,
            };

            let token = bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;
            let session_id = claims.session_id()?;

            let session = SessionRepository::new(state.pool.clone())
                .find_by_id(session_id)
                .await?
                .filter(|s| s.user_id == user_id)
                .ok_or_else(|| ApiError::not_found(INVALID_SESSION))?;

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(session.user_id)
                .await?
                .ok_or_else(|| ApiError::not_found(INVALID_SESSION))?;

            log::debug!("Request authenticated as user {}", user.id);

            Ok(CurrentUser(user))
        }
    }
}
