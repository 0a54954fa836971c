//! Account creation for `create-teacher` and `create-student`.

use anyhow::{Result, anyhow, bail};

use educapost_auth::Role;
use educapost_core::hash_password;
use educapost_db::{Store, StoreError};
use educapost_models::{AccountPayload, AccountProfile, NewAccount};

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// Validates `payload` with the API's create rules and inserts the account.
pub async fn create_account(
    store: &dyn Store,
    role: Role,
    payload: &AccountPayload,
) -> Result<AccountProfile> {
    let fields = payload
        .validate_for_create()
        .map_err(|errors| anyhow!(errors.join(", ")))?;

    if store
        .find_account_by_email(role, &fields.email)
        .await?
        .is_some()
    {
        bail!(EMAIL_ALREADY_REGISTERED);
    }

    let password_hash = hash_password(&fields.password)
        .map_err(|err| anyhow!("Failed to hash password: {}", err.message))?;

    let account = store
        .insert_account(
            role,
            NewAccount {
                name: fields.name,
                email: fields.email,
                password_hash,
            },
        )
        .await
        .map_err(|err| match err {
            StoreError::UniqueViolation(_) => anyhow!(EMAIL_ALREADY_REGISTERED),
            other => other.into(),
        })?;

    Ok(account.into())
}
