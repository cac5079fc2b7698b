//! Room database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the rooms table
#[derive(Debug, Clone, FromRow)]
pub struct RoomModel {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
    pub active_tray_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
