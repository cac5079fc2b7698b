//! Tray handlers
//!
//! Endpoint for starting a new tray in a room.

use axum::{
    extract::{Path, State},
    Json,
};
use tray_service::{CreateTrayRequest, TrayResponse, TrayService};

use crate::extractors::{CurrentUser, OptionalValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Start a new tray, making it the room's active tray
///
/// POST /rooms/{room_id}/trays
pub async fn create_tray(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(room_id): Path<String>,
    OptionalValidatedJson(request): OptionalValidatedJson<CreateTrayRequest>,
) -> ApiResult<Created<Json<TrayResponse>>> {
    let room_id = room_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid room_id format"))?;

    let service = TrayService::new(state.service_context());
    let response = service
        .create_tray_for_room(room_id, current.user_id, request.unwrap_or_default())
        .await?;
    Ok(Created(Json(response)))
}
