//! JWT token issuance and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. Tokens are
//! stateless: there is no server-side session or revocation list, so expiry
//! is the only invalidation. Validation checks the signature, expiration,
//! issuer, and audience; all four are mandatory.

use chrono::{TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use linkvault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum HMAC secret length in bytes. Shorter keys are rejected at
/// issuance time rather than producing weakly-signed tokens.
const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 60;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id, as a string.
    pub sub: String,
    /// The user's username.
    pub unique_name: String,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Errors from token issuance and validation.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("The JWT Key must have at least 32 characters.")]
    WeakKey,
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Issuer claim, validated on every token.
    pub issuer: String,
    /// Audience claim, validated on every token.
    pub audience: String,
    /// Token lifetime in minutes (default: 60).
    pub expiry_mins: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default     |
    /// |--------------------|----------|-------------|
    /// | `JWT_SECRET`       | **yes**  | --          |
    /// | `JWT_ISSUER`       | no       | `LinkVault` |
    /// | `JWT_AUDIENCE`     | no       | `LinkVault` |
    /// | `JWT_EXPIRY_MINS`  | no       | `60`        |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "LinkVault".into());
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "LinkVault".into());

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            issuer,
            audience,
            expiry_mins,
        }
    }
}

/// Issue an HS256 token for the given user.
///
/// Returns the encoded token together with its expiration instant.
/// Fails with [`TokenError::WeakKey`] when the configured secret is
/// shorter than 32 bytes.
pub fn issue_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<(String, Timestamp), TokenError> {
    if config.secret.len() < MIN_SECRET_LEN {
        return Err(TokenError::WeakKey);
    }

    let now = Utc::now().timestamp();
    let exp = now + config.expiry_mins * 60;

    let claims = Claims {
        sub: user_id.to_string(),
        unique_name: username.to_string(),
        jti: Uuid::new_v4().to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        exp,
        iat: now,
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    let expires_at = Utc
        .timestamp_opt(exp, 0)
        .single()
        .expect("expiry timestamp in valid range");

    Ok((token, expires_at))
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks the signature, expiration, issuer, and audience.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::default(); // HS256
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.set_required_spec_claims(&["exp", "iss", "aud"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
