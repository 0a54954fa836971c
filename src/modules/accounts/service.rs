use tracing::instrument;

use educapost_auth::Role;
use educapost_core::{AppError, hash_password};
use educapost_db::{Store, StoreError};
use educapost_models::{AccountChanges, AccountList, AccountPayload, AccountProfile, NewAccount};

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";
pub const EMAIL_ALREADY_IN_USE: &str = "Email already in use";

/// CRUD over one account table, selected by `role`.
pub struct AccountService;

impl AccountService {
    #[instrument(skip(store))]
    pub async fn list_accounts(store: &dyn Store, role: Role) -> Result<AccountList, AppError> {
        let accounts = store.list_accounts(role).await?;
        Ok(AccountList {
            items: accounts.into_iter().map(AccountProfile::from).collect(),
        })
    }

    #[instrument(skip(store))]
    pub async fn get_account(
        store: &dyn Store,
        role: Role,
        id: i32,
    ) -> Result<AccountProfile, AppError> {
        store
            .find_account(role, id)
            .await?
            .map(AccountProfile::from)
            .ok_or_else(|| not_found(role))
    }

    #[instrument(skip(store, payload))]
    pub async fn create_account(
        store: &dyn Store,
        role: Role,
        payload: AccountPayload,
    ) -> Result<AccountProfile, AppError> {
        let fields = payload.validate_for_create().map_err(AppError::validation)?;

        if store
            .find_account_by_email(role, &fields.email)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(EMAIL_ALREADY_REGISTERED));
        }

        let password_hash = hash_password(&fields.password)?;

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
            .map_err(|err| email_conflict(err, EMAIL_ALREADY_REGISTERED))?;

        Ok(account.into())
    }

    /// Replaces name and email; the password only changes when a new one is given.
    #[instrument(skip(store, payload))]
    pub async fn update_account(
        store: &dyn Store,
        role: Role,
        id: i32,
        payload: AccountPayload,
    ) -> Result<AccountProfile, AppError> {
        let fields = payload.validate_for_update().map_err(AppError::validation)?;

        if store.find_account(role, id).await?.is_none() {
            return Err(not_found(role));
        }

        if let Some(owner) = store.find_account_by_email(role, &fields.email).await?
            && owner.id != id
        {
            return Err(AppError::bad_request(EMAIL_ALREADY_IN_USE));
        }

        let password_hash = fields
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        store
            .update_account(
                role,
                id,
                AccountChanges {
                    name: fields.name,
                    email: fields.email,
                    password_hash,
                },
            )
            .await
            .map_err(|err| email_conflict(err, EMAIL_ALREADY_IN_USE))?
            .map(AccountProfile::from)
            .ok_or_else(|| not_found(role))
    }

    #[instrument(skip(store))]
    pub async fn delete_account(store: &dyn Store, role: Role, id: i32) -> Result<(), AppError> {
        if !store.delete_account(role, id).await? {
            return Err(not_found(role));
        }
        Ok(())
    }
}

fn not_found(role: Role) -> AppError {
    AppError::not_found(format!("{} not found", role.label()))
}

/// A racing duplicate that slips past the lookup reports the same 400.
fn email_conflict(err: StoreError, message: &str) -> AppError {
    match err {
        StoreError::UniqueViolation(_) => AppError::bad_request(message),
        other => AppError::database(other),
    }
}
