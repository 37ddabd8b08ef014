//! User management. Create, update, and delete are reserved for the
//! admin user (id 1); the rule is enforced here so every caller gets the
//! same behavior regardless of route.

use linkvault_core::error::CoreError;
use linkvault_core::types::{DbId, ADMIN_USER_ID};
use linkvault_db::mapper;
use linkvault_db::models::user::UserDto;
use linkvault_db::repositories::UserRepo;
use linkvault_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Password assigned to newly created users. Users are expected to change
/// it through the profile endpoint after first login.
const DEFAULT_PASSWORD: &str = "123456";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &DbPool) -> AppResult<Vec<UserDto>> {
        let users = UserRepo::list(pool).await?;
        Ok(users.iter().map(mapper::user_to_dto).collect())
    }

    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<UserDto> {
        let user = UserRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "User", id })?;
        Ok(mapper::user_to_dto(&user))
    }

    /// Create (id 0) or update a user. Admin only.
    pub async fn save(pool: &DbPool, caller_id: DbId, dto: &UserDto) -> AppResult<UserDto> {
        if dto.id == 0 {
            if caller_id != ADMIN_USER_ID {
                return Err(CoreError::domain("Only the Admin can create users.").into());
            }
            if UserRepo::username_exists(pool, &dto.username, None).await? {
                return Err(CoreError::domain(format!(
                    "Username '{}' already exists.",
                    dto.username
                ))
                .into());
            }

            let hash = hash_password(DEFAULT_PASSWORD)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

            let user = UserRepo::create(pool, &dto.name, &dto.username, &hash).await?;
            Ok(mapper::user_to_dto(&user))
        } else {
            if caller_id != ADMIN_USER_ID {
                return Err(CoreError::domain("Only the Admin can update users.").into());
            }

            let mut user = UserRepo::find_by_id(pool, dto.id).await?.ok_or_else(|| {
                CoreError::domain(format!("User with ID {} not found.", dto.id))
            })?;

            if UserRepo::username_exists(pool, &dto.username, Some(dto.id)).await? {
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
    }

    /// Delete a user. Admin only, and never the caller's own account;
    /// the self check runs first, so deleting id 1 reports self-deletion.
    /// Returns `false` when no such user exists.
    pub async fn delete(pool: &DbPool, caller_id: DbId, id: DbId) -> AppResult<bool> {
        if caller_id != ADMIN_USER_ID {
            return Err(CoreError::domain("Only the Admin can delete users.").into());
        }
        if id == caller_id {
            return Err(CoreError::domain("You cannot delete your own account.").into());
        }
        if id == ADMIN_USER_ID {
            return Err(CoreError::domain("The admin user can't be deleted.").into());
        }
        Ok(UserRepo::delete(pool, id).await?)
    }

    pub async fn username_exists(pool: &DbPool, username: &str) -> AppResult<bool> {
        Ok(UserRepo::username_exists(pool, username, None).await?)
    }
}
