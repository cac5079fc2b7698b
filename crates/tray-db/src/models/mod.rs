//! Database models - SQLx-compatible structs for PostgreSQL tables

mod egg;
mod member;
mod room;
mod tray;
mod user;

pub use egg::EggModel;
pub use member::RoomMemberModel;
pub use room::RoomModel;
pub use tray::TrayModel;
pub use user::UserModel;
