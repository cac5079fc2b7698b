//! Tray service
//!
//! Handles starting trays: the bootstrap tray on room creation and explicit
//! "start new tray" requests from room members.

use chrono::Utc;
use tracing::{info, instrument};

use tray_core::entities::{Egg, Tray, TRAY_SIZE};
use tray_core::{DomainError, RoomEvent, Snowflake};

use crate::dto::{CreateTrayRequest, TrayResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tray service
pub struct TrayService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrayService<'a> {
    /// Create a new TrayService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a tray for a room and fill it with its 30 unclaimed eggs.
    ///
    /// Shared by room creation and the public mutation; membership is the
    /// caller's responsibility. Does not touch the room's active tray.
    pub(crate) async fn start_tray(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
        label: Option<String>,
    ) -> ServiceResult<Tray> {
        let now = Utc::now();
        let label = label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map_or_else(|| Tray::default_label(now), String::from);

        let tray = Tray::new(self.ctx.generate_id(), room_id, label, user_id);
        self.ctx.tray_repo().create(&tray).await?;

        let eggs: Vec<Egg> = (0..TRAY_SIZE as i32)
            .map(|position| Egg::new(self.ctx.generate_id(), tray.id, position))
            .collect();
        self.ctx.egg_repo().create_batch(&eggs).await?;

        info!(tray_id = %tray.id, room_id = %room_id, label = %tray.label, "Tray started");

        Ok(tray)
    }

    /// Start a new tray for a room, making it the active tray
    ///
    /// The previous tray stays queryable by id but is no longer surfaced by
    /// the room summary.
    #[instrument(skip(self, request))]
    pub async fn create_tray_for_room(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
        request: CreateTrayRequest,
    ) -> ServiceResult<TrayResponse> {
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

        if !self.ctx.member_repo().is_member(room.id, user_id).await? {
            return Err(DomainError::NotRoomMember.into());
        }

        let tray = self.start_tray(room.id, user_id, request.label).await?;
        self.ctx.room_repo().set_active_tray(room.id, tray.id).await?;

        self.ctx.events().publish(&RoomEvent::TrayStarted {
            room_id: room.id,
            tray_id: tray.id,
        });

        Ok(TrayResponse::from(&tray))
    }
}

#[cfg(test)]
mod tests {
    // Covered by the in-memory service tests in tests/service_tests.rs
}
