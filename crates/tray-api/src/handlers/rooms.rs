//! Room handlers
//!
//! Endpoints for room creation, joining, and the room summary projection.

use axum::{
    extract::{Path, State},
    Json,
};
use tray_service::{
    CreateRoomRequest, JoinRoomResponse, MemberService, RoomResponse, RoomService,
    RoomSummaryResponse, ServiceError,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a new room
///
/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let service = RoomService::new(state.service_context());
    let response = service.create_room(current.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Join a room (idempotent)
///
/// POST /rooms/{room_id}/join
pub async fn join_room(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(room_id): Path<String>,
) -> ApiResult<Json<JoinRoomResponse>> {
    let room_id = room_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid room_id format"))?;

    let service = MemberService::new(state.service_context());
    let response = service.join_room(room_id, current.user_id).await?;
    Ok(Json(response))
}

/// Get the full room summary
///
/// GET /rooms/{room_id}/summary
pub async fn get_room_summary(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(room_id): Path<String>,
) -> ApiResult<Json<RoomSummaryResponse>> {
    let room_id: tray_core::Snowflake = room_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid room_id format"))?;

    let service = RoomService::new(state.service_context());
    let summary = service
        .get_room_summary(room_id, current.user_id)
        .await?
        .ok_or_else(|| ApiError::Service(ServiceError::not_found("Room", room_id.to_string())))?;
    Ok(Json(summary))
}
