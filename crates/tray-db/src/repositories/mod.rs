//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tray-core.
//! Each repository handles database operations for a specific record type.

mod egg;
mod error;
mod member;
mod room;
mod tray;
mod user;

pub use egg::PgEggRepository;
pub use member::PgMemberRepository;
pub use room::PgRoomRepository;
pub use tray::PgTrayRepository;
pub use user::PgUserRepository;
