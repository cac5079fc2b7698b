//! RoomMember entity <-> model mapper

use tray_core::entities::RoomMember;
use tray_core::value_objects::Snowflake;

use crate::models::RoomMemberModel;

impl From<RoomMemberModel> for RoomMember {
    fn from(model: RoomMemberModel) -> Self {
        RoomMember {
            room_id: Snowflake::new(model.room_id),
            user_id: Snowflake::new(model.user_id),
            joined_at: model.joined_at,
        }
    }
}
