//! User entity - a participant identified by display name

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// Created once at sign-in and never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
