//! Member service
//!
//! Handles joining rooms. Joining is idempotent: re-joining an already
//! joined room reports `joined: false` instead of failing.

use tracing::{info, instrument};

use tray_core::entities::RoomMember;
use tray_core::{DomainError, RoomEvent, Snowflake};

use crate::dto::JoinRoomResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join a room
    #[instrument(skip(self))]
    pub async fn join_room(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<JoinRoomResponse> {
        let room = self
            .ctx
            .room_repo()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", room_id.to_string()))?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if self.ctx.member_repo().find(room.id, user_id).await?.is_some() {
            return Ok(JoinRoomResponse { joined: false });
        }

        let member = RoomMember::new(room.id, user_id);
        match self.ctx.member_repo().create(&member).await {
            Ok(()) => {}
            // Lost a race against a concurrent join; same outcome as the
            // membership already existing
            Err(DomainError::AlreadyMember) => {
                return Ok(JoinRoomResponse { joined: false });
            }
            Err(e) => return Err(e.into()),
        }

        info!(room_id = %room.id, user_id = %user_id, "User joined room");

        self.ctx.events().publish(&RoomEvent::MemberJoined {
            room_id: room.id,
            user_id,
        });

        Ok(JoinRoomResponse { joined: true })
    }
}

#[cfg(test)]
mod tests {
    // Covered by the in-memory service tests in tests/service_tests.rs
}
