//! Room event definitions
//!
//! Mutations publish these to room subscribers so clients can re-fetch the
//! room summary when the underlying records change.

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Event emitted after a successful mutation touching a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoomEvent {
    /// Room created with its bootstrap tray
    RoomCreated { room_id: Snowflake },
    /// A user joined the room
    MemberJoined {
        room_id: Snowflake,
        user_id: Snowflake,
    },
    /// A new tray became the room's active tray
    TrayStarted {
        room_id: Snowflake,
        tray_id: Snowflake,
    },
    /// An egg was claimed or released
    EggToggled {
        room_id: Snowflake,
        egg_id: Snowflake,
        user_id: Snowflake,
        claimed: bool,
    },
}

impl RoomEvent {
    /// The room this event belongs to
    pub fn room_id(&self) -> Snowflake {
        match self {
            Self::RoomCreated { room_id }
            | Self::MemberJoined { room_id, .. }
            | Self::TrayStarted { room_id, .. }
            | Self::EggToggled { room_id, .. } => *room_id,
        }
    }

    /// Event name as sent on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoomCreated { .. } => "room_created",
            Self::MemberJoined { .. } => "member_joined",
            Self::TrayStarted { .. } => "tray_started",
            Self::EggToggled { .. } => "egg_toggled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_accessor() {
        let event = RoomEvent::EggToggled {
            room_id: Snowflake::new(7),
            egg_id: Snowflake::new(8),
            user_id: Snowflake::new(9),
            claimed: true,
        };
        assert_eq!(event.room_id(), Snowflake::new(7));
        assert_eq!(event.name(), "egg_toggled");
    }

    #[test]
    fn test_serialized_shape() {
        let event = RoomEvent::MemberJoined {
            room_id: Snowflake::new(1),
            user_id: Snowflake::new(2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "member_joined");
        assert_eq!(json["room_id"], "1");
        assert_eq!(json["user_id"], "2");
    }
}
