//! Teacher and student accounts.
//!
//! Both roles share one shape and one set of rules; they live in separate
//! tables, so an email is unique per role, not globally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::validation::{char_len, is_valid_email, string_field, trimmed_field};

pub const NAME_TOO_SHORT: &str = "name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "email must be valid";
pub const PASSWORD_TOO_SHORT: &str = "password must be at least 6 characters";
pub const PASSWORD_TOO_SHORT_WHEN_PROVIDED: &str =
    "password must be at least 6 characters when provided";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Stored account row. Never serialized: use [`AccountProfile`] for responses.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccountList {
    pub items: Vec<AccountProfile>,
}

/// Body of account create/update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
}

/// Validated fields for a new account. `password` is still plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated fields for an update; `password: None` keeps the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdateFields {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl AccountPayload {
    /// Name, email, then a mandatory password.
    pub fn validate_for_create(&self) -> Result<AccountFields, Vec<String>> {
        let (name, email, mut errors) = self.check_identity();

        let password = string_field(self.password.as_ref());
        if char_len(&password) < MIN_PASSWORD_LEN {
            errors.push(PASSWORD_TOO_SHORT.to_string());
        }

        if errors.is_empty() {
            Ok(AccountFields {
                name,
                email,
                password,
            })
        } else {
            Err(errors)
        }
    }

    /// Name, email, then an optional password (empty means unchanged).
    pub fn validate_for_update(&self) -> Result<AccountUpdateFields, Vec<String>> {
        let (name, email, mut errors) = self.check_identity();

        let password = string_field(self.password.as_ref());
        if !password.is_empty() && char_len(&password) < MIN_PASSWORD_LEN {
            errors.push(PASSWORD_TOO_SHORT_WHEN_PROVIDED.to_string());
        }

        if errors.is_empty() {
            Ok(AccountUpdateFields {
                name,
                email,
                password: (!password.is_empty()).then_some(password),
            })
        } else {
            Err(errors)
        }
    }

    fn check_identity(&self) -> (String, String, Vec<String>) {
        let mut errors = Vec::new();

        let name = trimmed_field(self.name.as_ref());
        if char_len(&name) < 2 {
            errors.push(NAME_TOO_SHORT.to_string());
        }

        let email = trimmed_field(self.email.as_ref()).to_lowercase();
        if email.is_empty() {
            errors.push(EMAIL_REQUIRED.to_string());
        } else if !is_valid_email(&email) {
            errors.push(EMAIL_INVALID.to_string());
        }

        (name, email, errors)
    }
}

/// Row to insert, with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct AccountChanges {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}
