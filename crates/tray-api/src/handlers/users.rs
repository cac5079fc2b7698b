//! User handlers
//!
//! Endpoints for sign-in (user creation), user lookup, and the caller's room
//! dashboard.

use axum::{
    extract::{Path, State},
    Json,
};
use tray_service::{
    CreateUserRequest, RoomListEntryResponse, RoomService, UserResponse, UserService,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// List the calling user's rooms with member counts
///
/// GET /users/@me/rooms
pub async fn list_my_rooms(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<Vec<RoomListEntryResponse>>> {
    let service = RoomService::new(state.service_context());
    let response = service.list_rooms(current.user_id).await?;
    Ok(Json(response))
}
