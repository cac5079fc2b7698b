//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tray_core::entities::Room;
use tray_core::traits::{RepoResult, RoomRepository};
use tray_core::value_objects::Snowflake;

use crate::models::RoomModel;

use super::error::{map_db_error, room_not_found};

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, name, created_by, active_tray_id, created_at, updated_at
            FROM rooms
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Room::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, room: &Room) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO rooms (id, name, created_by, active_tray_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(room.id.as_i64())
        .bind(&room.name)
        .bind(room.created_by.as_i64())
        .bind(room.active_tray_id.map(Snowflake::as_i64))
        .bind(room.created_at)
        .bind(room.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active_tray(&self, room_id: Snowflake, tray_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET active_tray_id = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(room_id.as_i64())
        .bind(tray_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, room_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM room_members WHERE room_id = $1
            ",
        )
        .bind(room_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
