//! The persistence boundary.
//!
//! Handlers and middleware only ever see `Arc<dyn Store>`. Each method is a
//! single logical statement against the backing store; there are no
//! multi-call transactions and no retries.

use async_trait::async_trait;
use thiserror::Error;

use educapost_auth::Role;
use educapost_core::PageRequest;
use educapost_models::{
    Account, AccountChanges, Category, NewAccount, NewPost, Post, PostChanges, PostFilter,
};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write (e.g. a duplicate email).
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("store unavailable")]
    Unavailable,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return StoreError::UniqueViolation(
                db_err.constraint().unwrap_or("unique").to_string(),
            );
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Active categories ordered by `order`, then `id`.
    async fn list_active_categories(&self) -> StoreResult<Vec<Category>>;

    /// Any category, active or not.
    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>>;

    async fn is_active_category(&self, id: i32) -> StoreResult<bool>;

    async fn count_posts(&self, filter: &PostFilter) -> StoreResult<i64>;

    /// One page of posts matching `filter`, ties broken by id.
    async fn list_posts(&self, filter: &PostFilter, page: &PageRequest) -> StoreResult<Vec<Post>>;

    async fn find_post(&self, id: i32) -> StoreResult<Option<Post>>;

    async fn insert_post(&self, post: NewPost) -> StoreResult<Post>;

    /// `None` when the post no longer exists.
    async fn update_post(&self, id: i32, changes: PostChanges) -> StoreResult<Option<Post>>;

    /// `true` when a row was removed.
    async fn delete_post(&self, id: i32) -> StoreResult<bool>;

    async fn list_accounts(&self, role: Role) -> StoreResult<Vec<Account>>;

    async fn find_account(&self, role: Role, id: i32) -> StoreResult<Option<Account>>;

    async fn find_account_by_email(&self, role: Role, email: &str)
    -> StoreResult<Option<Account>>;

    async fn insert_account(&self, role: Role, account: NewAccount) -> StoreResult<Account>;

    async fn update_account(
        &self,
        role: Role,
        id: i32,
        changes: AccountChanges,
    ) -> StoreResult<Option<Account>>;

    /// Removing a teacher leaves their posts in place without an owner.
    async fn delete_account(&self, role: Role, id: i32) -> StoreResult<bool>;
}
