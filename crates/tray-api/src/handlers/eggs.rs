//! Egg handlers
//!
//! Endpoint for the claim toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use tray_service::{EggService, ToggleEggResponse};

use crate::extractors::CurrentUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Toggle an egg claim for the calling user
///
/// POST /eggs/{egg_id}/toggle
pub async fn toggle_egg(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(egg_id): Path<String>,
) -> ApiResult<Json<ToggleEggResponse>> {
    let egg_id = egg_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid egg_id format"))?;

    let service = EggService::new(state.service_context());
    let response = service.toggle_egg(egg_id, current.user_id).await?;
    Ok(Json(response))
}
