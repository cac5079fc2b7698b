//! Egg database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the eggs table
#[derive(Debug, Clone, FromRow)]
pub struct EggModel {
    pub id: i64,
    pub tray_id: i64,
    pub position: i32,
    pub eaten_by: Option<i64>,
    pub eaten_at: Option<DateTime<Utc>>,
}
