//! Entity to response DTO mappers

use tray_core::entities::{Egg, Room, RoomMember, Tray, User};

use super::responses::{EggResponse, MemberResponse, RoomResponse, TrayResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name.clone(),
            created_by: room.created_by.to_string(),
            active_tray_id: room.active_tray_id.map(|id| id.to_string()),
            created_at: room.created_at,
        }
    }
}

impl From<&Tray> for TrayResponse {
    fn from(tray: &Tray) -> Self {
        Self {
            id: tray.id.to_string(),
            room_id: tray.room_id.to_string(),
            label: tray.label.clone(),
            created_by: tray.created_by.to_string(),
            created_at: tray.created_at,
        }
    }
}

impl From<&Egg> for EggResponse {
    fn from(egg: &Egg) -> Self {
        Self {
            id: egg.id.to_string(),
            tray_id: egg.tray_id.to_string(),
            position: egg.position,
            eaten_by: egg.eaten_by.map(|id| id.to_string()),
            eaten_at: egg.eaten_at,
        }
    }
}

/// Membership joined with its user record for the member list
#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: RoomMember,
    pub user: User,
}

impl From<MemberWithUser> for MemberResponse {
    fn from(value: MemberWithUser) -> Self {
        Self {
            user_id: value.user.id.to_string(),
            name: value.user.name,
            joined_at: value.member.joined_at,
        }
    }
}
