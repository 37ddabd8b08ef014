//! Project entity model and DTO.

use linkvault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Project row. Every project belongs to exactly one user.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
}

/// Wire shape of a project. The owning-user relation is carried as
/// `userId`; 0 means "no relation" (the server assigns the caller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(default)]
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub user_id: DbId,
}
