//! Repository for the `labels` table. Labels are global across users.

use linkvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::label::Label;

const COLUMNS: &str = "id, name";

pub struct LabelRepo;

impl LabelRepo {
    pub async fn create(pool: &PgPool, name: &str) -> Result<Label, sqlx::Error> {
        let query = format!("INSERT INTO labels (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Label>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels WHERE id = $1");
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels ORDER BY id");
        sqlx::query_as::<_, Label>(&query).fetch_all(pool).await
    }

    pub async fn update(pool: &PgPool, label: &Label) -> Result<Label, sqlx::Error> {
        let query = format!("UPDATE labels SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Label>(&query)
            .bind(label.id)
            .bind(&label.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a label. Join rows on links go with it (FK cascade).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a label name is taken anywhere (labels are globally
    /// unique), optionally excluding one label.
    pub async fn name_exists(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM labels
                 WHERE name = $1 AND ($2::bigint IS NULL OR id <> $2)
             )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
