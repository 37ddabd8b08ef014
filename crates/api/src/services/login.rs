//! Credential verification.

use linkvault_core::error::CoreError;
use linkvault_db::models::user::User;
use linkvault_db::repositories::UserRepo;
use linkvault_db::DbPool;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};

pub struct LoginService;

impl LoginService {
    /// Verify a username/password pair, returning the matching user.
    ///
    /// Blank or whitespace-only credentials fail before any storage
    /// lookup; otherwise the raw values are compared, so credentials
    /// stored with leading or trailing whitespace stay valid. Unknown
    /// username and wrong password produce the same message so the
    /// response does not reveal which part was wrong.
    pub async fn authenticate(
        pool: &DbPool,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        if username.trim().is_empty() {
            return Err(CoreError::unauthorized("Username cannot be empty").into());
        }
        if password.trim().is_empty() {
            return Err(CoreError::unauthorized("Password cannot be empty").into());
        }

        let invalid = || AppError::Core(CoreError::unauthorized("Invalid username or password"));

        let user = UserRepo::find_by_username(pool, username)
            .await?
            .ok_or_else(invalid)?;

        let valid = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        if !valid {
            return Err(invalid());
        }

        Ok(user)
    }
}
