//! Project service. Every operation is scoped to the owning user; a
//! project belonging to someone else behaves as if it did not exist.

use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::mapper;
use linkvault_db::models::project::ProjectDto;
use linkvault_db::repositories::{ProjectRepo, UserRepo};
use linkvault_db::DbPool;

use crate::error::AppResult;

pub struct ProjectService;

impl ProjectService {
    pub async fn list(pool: &DbPool, owner_id: DbId) -> AppResult<Vec<ProjectDto>> {
        let projects = ProjectRepo::list_for_user(pool, owner_id).await?;
        Ok(projects.iter().map(mapper::project_to_dto).collect())
    }

    pub async fn get(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<ProjectDto> {
        let project = ProjectRepo::find_by_id_for_user(pool, id, owner_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        Ok(mapper::project_to_dto(&project))
    }

    /// Create (id 0) or update a project owned by the caller. Project
    /// names are unique per owner, not globally.
    pub async fn save(pool: &DbPool, owner_id: DbId, dto: &ProjectDto) -> AppResult<ProjectDto> {
        if UserRepo::find_by_id(pool, owner_id).await?.is_none() {
            return Err(
                CoreError::domain(format!("User with ID {owner_id} not found.")).into(),
            );
        }

        if dto.id == 0 {
            if ProjectRepo::name_exists_for_user(pool, &dto.name, owner_id, None).await? {
                return Err(CoreError::domain(format!(
                    "Project '{}' already exists for this user.",
                    dto.name
                ))
                .into());
            }

            let project = ProjectRepo::create(pool, &dto.name, owner_id).await?;
            Ok(mapper::project_to_dto(&project))
        } else {
            let mut project = ProjectRepo::find_by_id_for_user(pool, dto.id, owner_id)
                .await?
                .ok_or_else(|| {
                    CoreError::domain(format!("Project with ID {} not found.", dto.id))
                })?;

            if ProjectRepo::name_exists_for_user(pool, &dto.name, owner_id, Some(dto.id)).await? {
                return Err(CoreError::domain(format!(
                    "Project '{}' already exists for this user.",
                    dto.name
                ))
                .into());
            }

            mapper::apply_project_dto(dto, &mut project);
            // Ownership never changes on update.
            project.user_id = owner_id;
            let project = ProjectRepo::update(pool, &project).await?;
            Ok(mapper::project_to_dto(&project))
        }
    }

    /// Delete a project owned by the caller. Returns `false` on a miss.
    pub async fn delete(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<bool> {
        Ok(ProjectRepo::delete_for_user(pool, id, owner_id).await?)
    }

    pub async fn exists(pool: &DbPool, id: DbId, owner_id: DbId) -> AppResult<bool> {
        Ok(ProjectRepo::exists_for_user(pool, id, owner_id).await?)
    }
}
