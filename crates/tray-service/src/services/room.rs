//! Room service
//!
//! Handles room creation, the dashboard listing, and the room summary
//! projection.

use std::collections::HashMap;

use tracing::{info, instrument};

use tray_core::entities::{Room, RoomMember, TARGET_PER_MEMBER};
use tray_core::{RoomEvent, Snowflake};

use crate::dto::{
    CreateRoomRequest, EggResponse, MemberResponse, MemberWithUser, RoomListEntryResponse,
    RoomResponse, RoomSummaryResponse, TrayResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::tray::TrayService;

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new room
    ///
    /// The creator auto-joins as the first member and a bootstrap tray is
    /// started and made active before the room is returned.
    #[instrument(skip(self, request))]
    pub async fn create_room(
        &self,
        user_id: Snowflake,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Room name is required"));
        }

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut room = Room::new(self.ctx.generate_id(), name.to_string(), user_id);
        self.ctx.room_repo().create(&room).await?;

        let member = RoomMember::new(room.id, user_id);
        self.ctx.member_repo().create(&member).await?;

        let tray = TrayService::new(self.ctx)
            .start_tray(room.id, user_id, None)
            .await?;
        self.ctx.room_repo().set_active_tray(room.id, tray.id).await?;
        room.set_active_tray(tray.id);

        info!(room_id = %room.id, user_id = %user_id, "Room created");

        self.ctx
            .events()
            .publish(&RoomEvent::RoomCreated { room_id: room.id });

        Ok(RoomResponse::from(&room))
    }

    /// List every room the user belongs to, with member counts
    #[instrument(skip(self))]
    pub async fn list_rooms(&self, user_id: Snowflake) -> ServiceResult<Vec<RoomListEntryResponse>> {
        let memberships = self.ctx.member_repo().find_by_user(user_id).await?;

        let mut entries = Vec::with_capacity(memberships.len());
        for membership in memberships {
            // Memberships pointing at missing rooms are silently excluded
            let Some(room) = self.ctx.room_repo().find_by_id(membership.room_id).await? else {
                continue;
            };
            let member_count = self.ctx.room_repo().member_count(room.id).await?;

            entries.push(RoomListEntryResponse {
                id: room.id.to_string(),
                name: room.name,
                active_tray_id: room.active_tray_id.map(|id| id.to_string()),
                member_count,
            });
        }

        Ok(entries)
    }

    /// Assemble the full room summary projection
    ///
    /// Returns `None` when the room itself does not exist, distinguishing
    /// "room not found" from "room found but no tray started yet"
    /// (`tray: None, eggs: []`).
    #[instrument(skip(self))]
    pub async fn get_room_summary(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Option<RoomSummaryResponse>> {
        let Some(room) = self.ctx.room_repo().find_by_id(room_id).await? else {
            return Ok(None);
        };

        let current_user = self.ctx.user_repo().find_by_id(user_id).await?;
        let is_member = self.ctx.member_repo().is_member(room.id, user_id).await?;

        let entries = self.ctx.member_repo().find_by_room(room.id).await?;
        let mut members = Vec::with_capacity(entries.len());
        for entry in entries {
            // Members whose user record is missing are skipped
            if let Some(user) = self.ctx.user_repo().find_by_id(entry.user_id).await? {
                members.push(MemberResponse::from(MemberWithUser {
                    member: entry,
                    user,
                }));
            }
        }

        let mut tray = None;
        let mut eggs = Vec::new();
        if let Some(tray_id) = room.active_tray_id {
            if let Some(active) = self.ctx.tray_repo().find_by_id(tray_id).await? {
                eggs = self.ctx.egg_repo().find_by_tray(active.id).await?;
                tray = Some(active);
            }
        }

        let mut counts: HashMap<String, i64> = HashMap::new();
        for egg in &eggs {
            if let Some(owner) = egg.eaten_by {
                *counts.entry(owner.to_string()).or_insert(0) += 1;
            }
        }

        Ok(Some(RoomSummaryResponse {
            room: RoomResponse::from(&room),
            current_user: current_user.as_ref().map(UserResponse::from),
            is_member,
            members,
            tray: tray.as_ref().map(TrayResponse::from),
            eggs: eggs.iter().map(EggResponse::from).collect(),
            counts,
            target_per_member: TARGET_PER_MEMBER,
        }))
    }
}
