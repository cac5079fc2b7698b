//! Room entity <-> model mapper

use tray_core::entities::Room;
use tray_core::value_objects::Snowflake;

use crate::models::RoomModel;

impl From<RoomModel> for Room {
    fn from(model: RoomModel) -> Self {
        Room {
            id: Snowflake::new(model.id),
            name: model.name,
            created_by: Snowflake::new(model.created_by),
            active_tray_id: model.active_tray_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
