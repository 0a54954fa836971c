use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Work factor for stored credentials.
pub const PASSWORD_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, PASSWORD_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {e}")))
}
