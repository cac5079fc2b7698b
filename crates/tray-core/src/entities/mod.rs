//! Domain entities

mod egg;
mod member;
mod room;
mod tray;
mod user;

pub use egg::Egg;
pub use member::RoomMember;
pub use room::Room;
pub use tray::{Tray, TARGET_PER_MEMBER, TRAY_SIZE};
pub use user::User;
