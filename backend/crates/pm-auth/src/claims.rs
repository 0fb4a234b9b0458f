use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token issued for one login session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Session id
    pub sid: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;
        self.session_id()?;
        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        parse_claim_uuid("sub", &self.sub)
    }

    #[track_caller]
    pub fn session_id(&self) -> AuthErrorResult<Uuid> {
        parse_claim_uuid("sid", &self.sid)
    }
}

#[track_caller]
fn parse_claim_uuid(claim: &str, value: &str) -> AuthErrorResult<Uuid> {
    if value.is_empty() {
        return Err(AuthError::InvalidClaim {
            claim: claim.to_string(),
            message: format!("{claim} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Uuid::parse_str(value).map_err(|e| AuthError::InvalidClaim {
        claim: claim.to_string(),
        message: format!("{claim} is not a UUID: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
