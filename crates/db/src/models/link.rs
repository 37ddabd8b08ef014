//! Link entity model, join record, wire DTO, and search filter.

use linkvault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Link row. Every link belongs to exactly one user; labels are attached
/// through `link_labels` join rows.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: DbId,
    pub description: String,
    pub url: String,
    pub comments: Option<String>,
    pub read: bool,
    pub favorite: bool,
    pub user_id: DbId,
}

/// Join record associating one link with one label.
#[derive(Debug, Clone, FromRow)]
pub struct LinkLabel {
    pub id: DbId,
    pub link_id: DbId,
    pub label_id: DbId,
}

/// Wire shape of a link. Label associations travel as `labelIds`; the
/// owning-user relation as `userId` (0 = unset, the server assigns the
/// caller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    #[serde(default)]
    pub id: DbId,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub label_ids: Vec<DbId>,
}

/// Three-way favorite filter for link search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum FavoriteFilter {
    #[default]
    All,
    FavoritesOnly,
    NonFavoritesOnly,
}

impl TryFrom<u8> for FavoriteFilter {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FavoriteFilter::All),
            1 => Ok(FavoriteFilter::FavoritesOnly),
            2 => Ok(FavoriteFilter::NonFavoritesOnly),
            other => Err(format!("invalid favorite filter value: {other}")),
        }
    }
}

/// Request body for `POST /Link/search`. All filters are optional and
/// combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFilterDto {
    /// Substring match on the link description.
    #[serde(default)]
    pub description: Option<String>,
    /// Links carrying at least one of these labels.
    #[serde(default)]
    pub label_ids: Option<Vec<DbId>>,
    #[serde(default)]
    pub favorite: FavoriteFilter,
}
