//! Tray database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the trays table
#[derive(Debug, Clone, FromRow)]
pub struct TrayModel {
    pub id: i64,
    pub room_id: i64,
    pub label: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
