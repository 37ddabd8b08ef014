//! User entity model and DTOs.

use linkvault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`UserDto`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

/// Wire shape of a user. `id` of 0 (or absent) on input means "create".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: DbId,
    pub name: String,
    pub username: String,
}

/// Request body for `PUT /Profile/Password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub new_password: String,
}
