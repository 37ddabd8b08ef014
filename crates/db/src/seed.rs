//! Startup seeding: the distinguished admin user (id 1).

use linkvault_core::types::ADMIN_USER_ID;

use crate::repositories::UserRepo;
use crate::DbPool;

/// Ensure the admin user exists. Insert-if-absent with a fixed id; an
/// existing row is never overwritten. The id sequence is advanced past
/// any explicitly inserted id so subsequent inserts don't collide.
pub async fn ensure_admin_user(pool: &DbPool, password_hash: &str) -> Result<(), sqlx::Error> {
    if UserRepo::find_by_id(pool, ADMIN_USER_ID).await?.is_some() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO users (id, name, username, password_hash)
         VALUES ($1, 'Administrator', 'admin', $2)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(ADMIN_USER_ID)
    .bind(password_hash)
    .execute(pool)
    .await?;

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('users', 'id'),
                       GREATEST((SELECT MAX(id) FROM users), $1))",
    )
    .bind(ADMIN_USER_ID)
    .execute(pool)
    .await?;

    tracing::info!("Seeded admin user (id {})", ADMIN_USER_ID);
    Ok(())
}
