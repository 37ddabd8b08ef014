//! Self-service profile operations: the caller edits their own account.

use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::mapper;
use linkvault_db::models::user::UserDto;
use linkvault_db::repositories::UserRepo;
use linkvault_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

pub struct ProfileService;

impl ProfileService {
    /// Update the caller's own name and username. The target id is always
    /// the caller's; the DTO's id field is ignored.
    pub async fn update(pool: &DbPool, caller_id: DbId, dto: &UserDto) -> AppResult<UserDto> {
        let mut user = UserRepo::find_by_id(pool, caller_id)
            .await?
            .ok_or_else(|| {
                CoreError::domain(format!("User with ID {caller_id} not found."))
            })?;

        if UserRepo::username_exists(pool, &dto.username, Some(caller_id)).await? {
            return Err(CoreError::domain(format!(
                "Username '{}' already exists.",
                dto.username
            ))
            .into());
        }

        mapper::apply_user_dto(dto, &mut user);
        let user = UserRepo::update(pool, &user).await?;
        Ok(mapper::user_to_dto(&user))
    }

    /// Replace the caller's password.
    pub async fn change_password(
        pool: &DbPool,
        caller_id: DbId,
        new_password: &str,
    ) -> AppResult<()> {
        let hash = hash_password(new_password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let updated = UserRepo::update_password(pool, caller_id, &hash).await?;
        if !updated {
            return Err(
                CoreError::domain(format!("User with ID {caller_id} not found.")).into(),
            );
        }
        Ok(())
    }
}
