//! Token issuing and verification (HS256).
//!
//! ```ignore
//! use educapost_auth::{Role, create_token, verify_token};
//! use educapost_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(Role::Teacher, teacher.id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use educapost_config::JwtConfig;
use educapost_core::AppError;

use crate::claims::{Claims, Role};

pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Issues a token for `(role, id)` valid for `jwt_config.access_token_expiry` seconds.
pub fn create_token(role: Role, id: i32, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        role,
        id,
        iat: now,
        exp: now.saturating_add(jwt_config.access_token_expiry),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {e}")))
}

/// Verifies signature and expiry.
///
/// # Errors
///
/// Any failure (bad signature, malformed token, expired, unknown role) is
/// reported as a 401 "Invalid or expired token".
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN))
}
