//! Tray entity <-> model mapper

use tray_core::entities::Tray;
use tray_core::value_objects::Snowflake;

use crate::models::TrayModel;

impl From<TrayModel> for Tray {
    fn from(model: TrayModel) -> Self {
        Tray {
            id: Snowflake::new(model.id),
            room_id: Snowflake::new(model.room_id),
            label: model.label,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
        }
    }
}
