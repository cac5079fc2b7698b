//! Tray entity - a batch of 30 egg slots started for a room

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Number of egg slots in every tray
pub const TRAY_SIZE: usize = 30;

/// How many eggs each member is expected to eat for an even split
pub const TARGET_PER_MEMBER: usize = TRAY_SIZE / 2;

/// Tray entity
///
/// A tray is started for a room and immediately filled with `TRAY_SIZE` eggs
/// at positions `0..TRAY_SIZE`. Starting a new tray retires the previous one
/// without deleting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    pub id: Snowflake,
    pub room_id: Snowflake,
    pub label: String,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Tray {
    /// Create a new Tray
    pub fn new(id: Snowflake, room_id: Snowflake, label: String, created_by: Snowflake) -> Self {
        Self {
            id,
            room_id,
            label,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Default label for a tray started at the given time, e.g. "August 2025"
    pub fn default_label(at: DateTime<Utc>) -> String {
        at.format("%B %Y").to_string()
    }
}
