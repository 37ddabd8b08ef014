//! Repository for the `links` and `link_labels` tables.
//!
//! Reads take the pool; writes that participate in the save transaction
//! (row write + label-set replacement) are generic over the executor so
//! the service can run them on one connection.

use linkvault_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::link::{FavoriteFilter, Link, LinkFilterDto};

const COLUMNS: &str = "id, description, url, comments, read, favorite, user_id";

pub struct LinkRepo;

impl LinkRepo {
    /// Insert a new link, returning the created row. The `id` on the input
    /// entity is ignored.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        link: &Link,
    ) -> Result<Link, sqlx::Error> {
        let query = format!(
            "INSERT INTO links (description, url, comments, read, favorite, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(&link.description)
            .bind(&link.url)
            .bind(&link.comments)
            .bind(link.read)
            .bind(link.favorite)
            .bind(link.user_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Link>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Persist the scalar fields of a loaded row.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        link: &Link,
    ) -> Result<Link, sqlx::Error> {
        let query = format!(
            "UPDATE links SET
                description = $2,
                url = $3,
                comments = $4,
                read = $5,
                favorite = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(link.id)
            .bind(&link.description)
            .bind(&link.url)
            .bind(&link.comments)
            .bind(link.read)
            .bind(link.favorite)
            .fetch_one(executor)
            .await
    }

    /// Delete a link owned by the given user along with its join rows.
    /// Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Join rows first, then the link itself.
        sqlx::query(
            "DELETE FROM link_labels WHERE link_id = $1
               AND EXISTS (SELECT 1 FROM links WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM links WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Check whether the user already bookmarked this URL, optionally
    /// excluding one link (the update path).
    pub async fn url_exists_for_user(
        pool: &PgPool,
        url: &str,
        user_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM links
                 WHERE url = $1 AND user_id = $2 AND ($3::bigint IS NULL OR id <> $3)
             )",
        )
        .bind(url)
        .bind(user_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Overwrite the favorite flag on a link owned by the given user.
    /// Returns `true` if the row was updated.
    pub async fn set_favorite(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        favorite: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE links SET favorite = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(favorite)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Filtered listing for the caller: substring description match,
    /// label-set membership, three-way favorite filter. Absent filters
    /// are passed as NULL and ignored by the query.
    pub async fn search(
        pool: &PgPool,
        user_id: DbId,
        filter: &LinkFilterDto,
    ) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM links
             WHERE user_id = $1
               AND ($2::text IS NULL OR description LIKE '%' || $2 || '%')
               AND ($3::bigint[] IS NULL OR EXISTS (
                       SELECT 1 FROM link_labels ll
                       WHERE ll.link_id = links.id AND ll.label_id = ANY($3)))
               AND ($4::smallint = 0
                    OR ($4 = 1 AND favorite)
                    OR ($4 = 2 AND NOT favorite))
             ORDER BY id"
        );
        let favorite = match filter.favorite {
            FavoriteFilter::All => 0i16,
            FavoriteFilter::FavoritesOnly => 1,
            FavoriteFilter::NonFavoritesOnly => 2,
        };
        sqlx::query_as::<_, Link>(&query)
            .bind(user_id)
            .bind(&filter.description)
            .bind(&filter.label_ids)
            .bind(favorite)
            .fetch_all(pool)
            .await
    }

    /// Label ids associated with one link, ascending.
    pub async fn label_ids_for_link<'e>(
        executor: impl PgExecutor<'e>,
        link_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT label_id FROM link_labels WHERE link_id = $1 ORDER BY label_id",
        )
        .bind(link_id)
        .fetch_all(executor)
        .await
    }

    /// Replace the full label-association set of a link: delete every
    /// existing join row, then insert one per id. Run inside the same
    /// transaction as the link row write.
    pub async fn replace_labels(
        tx: &mut sqlx::PgConnection,
        link_id: DbId,
        label_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM link_labels WHERE link_id = $1")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        if !label_ids.is_empty() {
            sqlx::query(
                "INSERT INTO link_labels (link_id, label_id)
                 SELECT $1, unnest($2::bigint[])",
            )
            .bind(link_id)
            .bind(label_ids)
            .execute(&mut *tx)
            .await?;
        }

        Ok(())
    }
}
