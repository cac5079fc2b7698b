//! Data transfer objects
//!
//! Request DTOs are validated on the way in; response DTOs serialize
//! Snowflake IDs as strings for JavaScript compatibility.

mod mappers;
mod requests;
mod responses;

pub use mappers::MemberWithUser;
pub use requests::{CreateRoomRequest, CreateTrayRequest, CreateUserRequest};
pub use responses::{
    EggResponse, JoinRoomResponse, MemberResponse, RoomListEntryResponse, RoomResponse,
    RoomSummaryResponse, ToggleEggResponse, TrayResponse, UserResponse,
};
