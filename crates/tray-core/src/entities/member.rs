//! RoomMember entity - a user's membership in a room

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Room membership entity (junction between User and Room)
///
/// At most one membership exists per (room, user) pair; memberships are never
/// removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMember {
    pub room_id: Snowflake,
    pub user_id: Snowflake,
    pub joined_at: DateTime<Utc>,
}

impl RoomMember {
    /// Create a new RoomMember joining now
    pub fn new(room_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            room_id,
            user_id,
            joined_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = RoomMember::new(Snowflake::new(100), Snowflake::new(200));
        assert_eq!(member.room_id, Snowflake::new(100));
        assert_eq!(member.user_id, Snowflake::new(200));
    }
}
