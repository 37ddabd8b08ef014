//! Label service. Labels are global: shared across users, names unique
//! across the whole table.

use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::mapper;
use linkvault_db::models::label::LabelDto;
use linkvault_db::repositories::LabelRepo;
use linkvault_db::DbPool;

use crate::error::AppResult;

pub struct LabelService;

impl LabelService {
    pub async fn list(pool: &DbPool) -> AppResult<Vec<LabelDto>> {
        let labels = LabelRepo::list(pool).await?;
        Ok(labels.iter().map(mapper::label_to_dto).collect())
    }

    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<LabelDto> {
        let label = LabelRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Label", id })?;
        Ok(mapper::label_to_dto(&label))
    }

    /// Create (id 0) or update a label.
    pub async fn save(pool: &DbPool, dto: &LabelDto) -> AppResult<LabelDto> {
        if dto.id == 0 {
            if LabelRepo::name_exists(pool, &dto.name, None).await? {
                return Err(CoreError::domain(format!(
                    "Label '{}' already exists.",
                    dto.name
                ))
                .into());
            }

            let label = LabelRepo::create(pool, &dto.name).await?;
            Ok(mapper::label_to_dto(&label))
        } else {
            let mut label = LabelRepo::find_by_id(pool, dto.id).await?.ok_or_else(|| {
                CoreError::domain(format!("Label with ID {} not found.", dto.id))
            })?;

            if LabelRepo::name_exists(pool, &dto.name, Some(dto.id)).await? {
                return Err(CoreError::domain(format!(
                    "Label '{}' already exists.",
                    dto.name
                ))
                .into());
            }

            mapper::apply_label_dto(dto, &mut label);
            let label = LabelRepo::update(pool, &label).await?;
            Ok(mapper::label_to_dto(&label))
        }
    }

    /// Delete a label. Join rows on links go with it. Returns `false`
    /// on a miss.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<bool> {
        Ok(LabelRepo::delete(pool, id).await?)
    }
}
