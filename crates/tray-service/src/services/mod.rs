//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod egg;
pub mod error;
pub mod events;
pub mod member;
pub mod room;
pub mod tray;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use egg::EggService;
pub use error::{ServiceError, ServiceResult};
pub use events::RoomEventHub;
pub use member::MemberService;
pub use room::RoomService;
pub use tray::TrayService;
pub use user::UserService;
