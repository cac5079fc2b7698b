//! Room member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the room_members table
#[derive(Debug, Clone, FromRow)]
pub struct RoomMemberModel {
    pub room_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}
