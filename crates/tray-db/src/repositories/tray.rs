//! PostgreSQL implementation of TrayRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tray_core::entities::Tray;
use tray_core::traits::{RepoResult, TrayRepository};
use tray_core::value_objects::Snowflake;

use crate::models::TrayModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TrayRepository
#[derive(Clone)]
pub struct PgTrayRepository {
    pool: PgPool,
}

impl PgTrayRepository {
    /// Create a new PgTrayRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrayRepository for PgTrayRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tray>> {
        let result = sqlx::query_as::<_, TrayModel>(
            r"
            SELECT id, room_id, label, created_by, created_at
            FROM trays
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tray::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, tray: &Tray) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO trays (id, room_id, label, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(tray.id.as_i64())
        .bind(tray.room_id.as_i64())
        .bind(&tray.label)
        .bind(tray.created_by.as_i64())
        .bind(tray.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
