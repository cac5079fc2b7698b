//! PostgreSQL implementation of EggRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use tray_core::entities::Egg;
use tray_core::traits::{EggRepository, RepoResult};
use tray_core::value_objects::Snowflake;

use crate::models::EggModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EggRepository
///
/// Claim and release are single conditional UPDATEs. The row condition stands
/// in for the single-document mutation atomicity the handlers rely on: of two
/// concurrent writers, exactly one matches the row and wins.
#[derive(Clone)]
pub struct PgEggRepository {
    pool: PgPool,
}

impl PgEggRepository {
    /// Create a new PgEggRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EggRepository for PgEggRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Egg>> {
        let result = sqlx::query_as::<_, EggModel>(
            r"
            SELECT id, tray_id, position, eaten_by, eaten_at
            FROM eggs
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Egg::from))
    }

    #[instrument(skip(self))]
    async fn find_by_tray(&self, tray_id: Snowflake) -> RepoResult<Vec<Egg>> {
        let results = sqlx::query_as::<_, EggModel>(
            r"
            SELECT id, tray_id, position, eaten_by, eaten_at
            FROM eggs
            WHERE tray_id = $1
            ORDER BY position
            ",
        )
        .bind(tray_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Egg::from).collect())
    }

    #[instrument(skip(self, eggs))]
    async fn create_batch(&self, eggs: &[Egg]) -> RepoResult<()> {
        if eggs.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = eggs.iter().map(|e| e.id.as_i64()).collect();
        let tray_ids: Vec<i64> = eggs.iter().map(|e| e.tray_id.as_i64()).collect();
        let positions: Vec<i32> = eggs.iter().map(|e| e.position).collect();

        sqlx::query(
            r"
            INSERT INTO eggs (id, tray_id, position, eaten_by, eaten_at)
            SELECT id, tray_id, position, NULL, NULL
            FROM UNNEST($1::BIGINT[], $2::BIGINT[], $3::INT[]) AS t(id, tray_id, position)
            ",
        )
        .bind(&ids)
        .bind(&tray_ids)
        .bind(&positions)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn claim(
        &self,
        egg_id: Snowflake,
        user_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE eggs
            SET eaten_by = $2, eaten_at = $3
            WHERE id = $1 AND eaten_by IS NULL
            ",
        )
        .bind(egg_id.as_i64())
        .bind(user_id.as_i64())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn release(&self, egg_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE eggs
            SET eaten_by = NULL, eaten_at = NULL
            WHERE id = $1 AND eaten_by = $2
            ",
        )
        .bind(egg_id.as_i64())
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
