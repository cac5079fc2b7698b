//! User entity <-> model mapper

use tray_core::entities::User;
use tray_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
