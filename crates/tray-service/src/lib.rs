//! # tray-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateRoomRequest, CreateTrayRequest, CreateUserRequest, EggResponse, JoinRoomResponse,
    MemberResponse, RoomListEntryResponse, RoomResponse, RoomSummaryResponse, ToggleEggResponse,
    TrayResponse, UserResponse,
};
pub use services::{
    EggService, MemberService, RoomEventHub, RoomService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TrayService, UserService,
};
