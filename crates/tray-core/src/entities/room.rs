//! Room entity - a shared group tracking one active tray

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Room entity
///
/// `active_tray_id` is null until the first tray is bootstrapped and from then
/// on always points at the most recently started tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Snowflake,
    pub name: String,
    pub created_by: Snowflake,
    pub active_tray_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a new Room without an active tray
    pub fn new(id: Snowflake, name: String, created_by: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_by,
            active_tray_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this room
    #[inline]
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.created_by == user_id
    }

    /// Check whether any tray has been started yet
    #[inline]
    pub fn has_tray(&self) -> bool {
        self.active_tray_id.is_some()
    }

    /// Make the given tray the active one, retiring the previous tray
    pub fn set_active_tray(&mut self, tray_id: Snowflake) {
        self.active_tray_id = Some(tray_id);
        self.updated_at = Utc::now();
    }
}
