//! # EducaPost Models
//!
//! Domain models, request payloads and the validation layer for the EducaPost API.
//!
//! Validators are pure: they take a loosely typed payload and return either
//! normalized fields or an ordered list of messages, and never touch the store.
//!
//! # Modules
//!
//! - [`accounts`]: teacher and student accounts
//! - [`auth`]: login request and responses
//! - [`categories`]: post categories
//! - [`posts`]: posts, write payloads and listing filters
//! - [`validation`]: shared field helpers
//!
//! # Example
//!
//! ```ignore
//! use educapost_models::PostPayload;
//!
//! let payload: PostPayload = serde_json::from_value(json!({ "title": "Hi", "content": "x" }))?;
//! assert_eq!(payload.validate().unwrap_err(), vec!["title must be at least 3 characters"]);
//! ```

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod posts;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use accounts::{
    Account, AccountChanges, AccountFields, AccountList, AccountPayload, AccountProfile,
    AccountUpdateFields, NewAccount,
};
pub use auth::{Credentials, LoginRequest, LoginResponse, MeResponse};
pub use categories::{Category, CategoryList};
pub use posts::{NewPost, Post, PostChanges, PostFields, PostFilter, PostPayload};
