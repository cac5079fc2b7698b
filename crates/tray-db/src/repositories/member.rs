//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tray_core::entities::RoomMember;
use tray_core::error::DomainError;
use tray_core::traits::{MemberRepository, RepoResult};
use tray_core::value_objects::Snowflake;

use crate::models::RoomMemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        room_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<RoomMember>> {
        let result = sqlx::query_as::<_, RoomMemberModel>(
            r"
            SELECT room_id, user_id, joined_at
            FROM room_members
            WHERE room_id = $1 AND user_id = $2
            ",
        )
        .bind(room_id.as_i64())
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RoomMember::from))
    }

    #[instrument(skip(self))]
    async fn find_by_room(&self, room_id: Snowflake) -> RepoResult<Vec<RoomMember>> {
        let results = sqlx::query_as::<_, RoomMemberModel>(
            r"
            SELECT room_id, user_id, joined_at
            FROM room_members
            WHERE room_id = $1
            ORDER BY joined_at, user_id
            ",
        )
        .bind(room_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RoomMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<RoomMember>> {
        let results = sqlx::query_as::<_, RoomMemberModel>(
            r"
            SELECT room_id, user_id, joined_at
            FROM room_members
            WHERE user_id = $1
            ORDER BY joined_at DESC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RoomMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, room_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM room_members WHERE room_id = $1 AND user_id = $2)
            ",
        )
        .bind(room_id.as_i64())
        .bind(user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &RoomMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO room_members (room_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(member.room_id.as_i64())
        .bind(member.user_id.as_i64())
        .bind(member.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }
}
