//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Room Responses
// ============================================================================

/// Basic room response
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub active_tray_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One row of the room dashboard listing
#[derive(Debug, Clone, Serialize)]
pub struct RoomListEntryResponse {
    pub id: String,
    pub name: String,
    pub active_tray_id: Option<String>,
    pub member_count: i64,
}

/// Result of a join attempt; `joined` is false when the caller was already a
/// member (re-joining is a no-op, not an error)
#[derive(Debug, Clone, Serialize)]
pub struct JoinRoomResponse {
    pub joined: bool,
}

// ============================================================================
// Tray and Egg Responses
// ============================================================================

/// Tray response
#[derive(Debug, Clone, Serialize)]
pub struct TrayResponse {
    pub id: String,
    pub room_id: String,
    pub label: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Egg response
#[derive(Debug, Clone, Serialize)]
pub struct EggResponse {
    pub id: String,
    pub tray_id: String,
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_at: Option<DateTime<Utc>>,
}

/// Result of an egg toggle; `claimed` reflects the state after the toggle
#[derive(Debug, Clone, Serialize)]
pub struct ToggleEggResponse {
    pub claimed: bool,
}

// ============================================================================
// Room Summary
// ============================================================================

/// Room member entry of the summary projection
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

/// Full room summary projection
///
/// `tray` is null (and `eggs` empty) when the room has no tray yet.
/// `counts` maps member user id to the number of eggs they currently own.
#[derive(Debug, Clone, Serialize)]
pub struct RoomSummaryResponse {
    pub room: RoomResponse,
    pub current_user: Option<UserResponse>,
    pub is_member: bool,
    pub members: Vec<MemberResponse>,
    pub tray: Option<TrayResponse>,
    pub eggs: Vec<EggResponse>,
    pub counts: HashMap<String, i64>,
    pub target_per_member: usize,
}
