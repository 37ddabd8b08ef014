//! Repository for the `projects` table. Every query is scoped to the
//! owning user; rows belonging to someone else behave as absent.

use linkvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

const COLUMNS: &str = "id, name, user_id";

pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn create(
        pool: &PgPool,
        name: &str,
        user_id: DbId,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, user_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Persist the scalar fields of a loaded row.
    pub async fn update(pool: &PgPool, project: &Project) -> Result<Project, sqlx::Error> {
        let query = format!("UPDATE projects SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(project.id)
            .bind(&project.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a project owned by the given user. Returns `true` if a row
    /// was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Check whether the user already has a project with this name,
    /// optionally excluding one project (the update path).
    pub async fn name_exists_for_user(
        pool: &PgPool,
        name: &str,
        user_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM projects
                 WHERE name = $1 AND user_id = $2 AND ($3::bigint IS NULL OR id <> $3)
             )",
        )
        .bind(name)
        .bind(user_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
