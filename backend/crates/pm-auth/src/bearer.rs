use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// An absent header and `Bearer` with nothing after it are both
/// [`AuthError::MissingToken`]; any other scheme is [`AuthError::InvalidScheme`].
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.map(str::trim).unwrap_or_default();
    if header.is_empty() || header == BEARER_PREFIX.trim_end() {
        return Err(AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    Ok(token.trim_start())
}
