//! Label entity model and DTO. Labels are global, not per-user.

use linkvault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Label {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDto {
    #[serde(default)]
    pub id: DbId,
    pub name: String,
}
