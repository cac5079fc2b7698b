//! Caller identity extractor
//!
//! The front end keeps the signed-in user id in local storage and passes it
//! with every call; here that is the `x-user-id` header. There is no session
//! or token layer, membership checks in the service layer are the only
//! authorization.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tray_core::Snowflake;

use crate::response::ApiError;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Calling user extracted from the `x-user-id` header
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID the caller acts as
    pub user_id: Snowflake,
}

impl CurrentUser {
    /// Create a new CurrentUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

fn parse_user_id(parts: &Parts) -> Result<Option<Snowflake>, ApiError> {
    let Some(value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let raw = value.to_str().map_err(|_| ApiError::InvalidIdentity)?;
    let user_id = raw.parse::<Snowflake>().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user id header");
        ApiError::InvalidIdentity
    })?;

    Ok(Some(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parse_user_id(parts)? {
            Some(user_id) => Ok(CurrentUser::new(user_id)),
            None => Err(ApiError::MissingIdentity),
        }
    }
}

/// Optional caller identity
///
/// Returns None if no `x-user-id` header is present, or an error if the
/// header is malformed.
#[derive(Debug, Clone)]
pub struct OptionalCurrentUser(pub Option<CurrentUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalCurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalCurrentUser(
            parse_user_id(parts)?.map(CurrentUser::new),
        ))
    }
}
