//! # tray-core
//!
//! Domain layer containing entities, value objects, repository traits, and room events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Egg, Room, RoomMember, Tray, User, TARGET_PER_MEMBER, TRAY_SIZE};
pub use error::DomainError;
pub use events::RoomEvent;
pub use traits::{
    EggRepository, MemberRepository, RepoResult, RoomRepository, TrayRepository, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
