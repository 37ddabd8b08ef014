//! Link service. Owner-scoped CRUD plus search, favorite toggling, and
//! label association management.
//!
//! Saving a link writes the row and replaces its label set inside one
//! transaction, so a failure partway leaves no half-written link.

use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::mapper;
use linkvault_db::models::link::{Link, LinkDto, LinkFilterDto};
use linkvault_db::repositories::{LinkRepo, UserRepo};
use linkvault_db::DbPool;

use crate::error::AppResult;

pub struct LinkService;

impl LinkService {
    pub async fn list(pool: &DbPool, owner_id: DbId) -> AppResult<Vec<LinkDto>> {
        let links = LinkRepo::list_for_user(pool, owner_id).await?;
        Self::to_dtos(pool, links).await
    }

    pub async fn get(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<LinkDto> {
        let link = LinkRepo::find_by_id_for_user(pool, id, owner_id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Link", id })?;
        let label_ids = LinkRepo::label_ids_for_link(pool, link.id).await?;
        Ok(mapper::link_to_dto(&link, label_ids))
    }

    /// Create (id 0) or update a link owned by the caller, replacing its
    /// label associations with exactly the DTO's `label_ids` set.
    pub async fn save(pool: &DbPool, owner_id: DbId, dto: &LinkDto) -> AppResult<LinkDto> {
        if UserRepo::find_by_id(pool, owner_id).await?.is_none() {
            return Err(
                CoreError::domain(format!("User with ID {owner_id} not found.")).into(),
            );
        }

        // Duplicate join rows would trip the unique index.
        let mut label_ids = dto.label_ids.clone();
        label_ids.sort_unstable();
        label_ids.dedup();

        let link = if dto.id == 0 {
            if LinkRepo::url_exists_for_user(pool, &dto.url, owner_id, None).await? {
                return Err(Self::duplicate_url(&dto.url));
            }

            let mut link = mapper::link_from_dto(dto);
            link.user_id = owner_id;

            let mut tx = pool.begin().await?;
            let link = LinkRepo::create(&mut *tx, &link).await?;
            LinkRepo::replace_labels(&mut *tx, link.id, &label_ids).await?;
            tx.commit().await?;
            link
        } else {
            let mut link = LinkRepo::find_by_id_for_user(pool, dto.id, owner_id)
                .await?
                .ok_or_else(|| {
                    CoreError::domain(format!("Link with ID {} not found.", dto.id))
                })?;

            if LinkRepo::url_exists_for_user(pool, &dto.url, owner_id, Some(dto.id)).await? {
                return Err(Self::duplicate_url(&dto.url));
            }

            mapper::apply_link_dto(dto, &mut link);
            link.user_id = owner_id;

            let mut tx = pool.begin().await?;
            let link = LinkRepo::update(&mut *tx, &link).await?;
            LinkRepo::replace_labels(&mut *tx, link.id, &label_ids).await?;
            tx.commit().await?;
            link
        };

        Ok(mapper::link_to_dto(&link, label_ids))
    }

    /// Delete a link owned by the caller. Returns `false` on a miss.
    pub async fn delete(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<bool> {
        Ok(LinkRepo::delete_for_user(pool, id, owner_id).await?)
    }

    pub async fn exists(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<bool> {
        Ok(LinkRepo::exists_for_user(pool, id, owner_id).await?)
    }

    /// Overwrite the favorite flag. Returns `false` when the caller owns
    /// no such link; a foreign link is never mutated.
    pub async fn update_favorite(
        pool: &DbPool,
        id: DbId,
        owner_id: DbId,
        favorite: bool,
    ) -> AppResult<bool> {
        Ok(LinkRepo::set_favorite(pool, id, owner_id, favorite).await?)
    }

    /// Filtered listing of the caller's links. Filters combine with AND;
    /// absent filters match everything.
    pub async fn search(
        pool: &DbPool,
        owner_id: DbId,
        filter: &LinkFilterDto,
    ) -> AppResult<Vec<LinkDto>> {
        let links = LinkRepo::search(pool, owner_id, filter).await?;
        Self::to_dtos(pool, links).await
    }

    fn duplicate_url(url: &str) -> crate::error::AppError {
        CoreError::domain(format!(
            "Link with URL '{url}' already exists for this user."
        ))
        .into()
    }

    async fn to_dtos(pool: &DbPool, links: Vec<Link>) -> AppResult<Vec<LinkDto>> {
        let mut dtos = Vec::with_capacity(links.len());
        for link in &links {
            let label_ids = LinkRepo::label_ids_for_link(pool, link.id).await?;
            dtos.push(mapper::link_to_dto(link, label_ids));
        }
        Ok(dtos)
    }
}
