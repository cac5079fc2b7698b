//! Egg service
//!
//! Handles the claim toggle, the one mutation where a race matters. The
//! handler only reads and decides; the winning write is a conditional update
//! in the repository, so two concurrent toggles on the same egg can never
//! both claim it.

use chrono::Utc;
use tracing::{info, instrument};

use tray_core::{DomainError, RoomEvent, Snowflake};

use crate::dto::ToggleEggResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Egg service
pub struct EggService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EggService<'a> {
    /// Create a new EggService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle an egg claim for the calling user
    ///
    /// Claims an unclaimed egg, releases the caller's own claim, and rejects
    /// the call when someone else holds the claim. Claims cannot be stolen.
    #[instrument(skip(self))]
    pub async fn toggle_egg(
        &self,
        egg_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<ToggleEggResponse> {
        let egg = self
            .ctx
            .egg_repo()
            .find_by_id(egg_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Egg", egg_id.to_string()))?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let tray = self
            .ctx
            .tray_repo()
            .find_by_id(egg.tray_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tray", egg.tray_id.to_string()))?;

        if !self.ctx.member_repo().is_member(tray.room_id, user_id).await? {
            return Err(DomainError::NotRoomMember.into());
        }

        if egg.is_claimed() && !egg.is_claimed_by(user_id) {
            return Err(DomainError::EggAlreadyClaimed.into());
        }

        let claimed = if egg.is_claimed_by(user_id) {
            // Release our own claim; a failed condition means the row changed
            // under us, which surfaces as the same conflict a direct loser sees
            if !self.ctx.egg_repo().release(egg.id, user_id).await? {
                return Err(DomainError::EggAlreadyClaimed.into());
            }
            false
        } else {
            if !self.ctx.egg_repo().claim(egg.id, user_id, Utc::now()).await? {
                return Err(DomainError::EggAlreadyClaimed.into());
            }
            true
        };

        info!(egg_id = %egg.id, user_id = %user_id, claimed, "Egg toggled");

        self.ctx.events().publish(&RoomEvent::EggToggled {
            room_id: tray.room_id,
            egg_id: egg.id,
            user_id,
            claimed,
        });

        Ok(ToggleEggResponse { claimed })
    }
}
