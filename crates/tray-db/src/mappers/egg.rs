//! Egg entity <-> model mapper

use tray_core::entities::Egg;
use tray_core::value_objects::Snowflake;

use crate::models::EggModel;

impl From<EggModel> for Egg {
    fn from(model: EggModel) -> Self {
        Egg {
            id: Snowflake::new(model.id),
            tray_id: Snowflake::new(model.tray_id),
            position: model.position,
            eaten_by: model.eaten_by.map(Snowflake::new),
            eaten_at: model.eaten_at,
        }
    }
}
