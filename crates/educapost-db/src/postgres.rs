//! PostgreSQL-backed [`Store`].

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use educapost_auth::Role;
use educapost_core::PageRequest;
use educapost_models::{
    Account, AccountChanges, Category, NewAccount, NewPost, Post, PostChanges, PostFilter,
};

use crate::store::{Store, StoreResult};

const POST_COLUMNS: &str = "p.id, p.title, p.content, t.name AS author, p.category_id, \
                            p.teacher_id, p.created_at, p.updated_at";

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, created_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn account_table(role: Role) -> &'static str {
    match role {
        Role::Teacher => "teachers",
        Role::Student => "students",
    }
}

/// Escapes `%`, `_` and `\` so the term matches literally inside `ILIKE`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_post_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
    if let PostFilter::Search(term) = filter {
        let pattern = like_pattern(term);
        builder
            .push(" WHERE (p.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.content ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self))]
    async fn list_active_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, label, sort_order, is_active
            FROM categories
            WHERE is_active
            ORDER BY sort_order, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, label, sort_order, is_active FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self))]
    async fn is_active_category(&self, id: i32) -> StoreResult<bool> {
        let active = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1 AND is_active)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(active)
    }

    #[instrument(skip(self))]
    async fn count_posts(&self, filter: &PostFilter) -> StoreResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM posts p");
        push_post_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn list_posts(&self, filter: &PostFilter, page: &PageRequest) -> StoreResult<Vec<Post>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {POST_COLUMNS} FROM posts p LEFT JOIN teachers t ON t.id = p.teacher_id"
        ));
        push_post_filter(&mut builder, filter);

        // Column and direction come from closed enums, never from raw input.
        let direction = page.order.as_sql();
        builder
            .push(format!(
                " ORDER BY p.{} {direction}, p.id {direction} LIMIT ",
                page.sort.column()
            ))
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset);

        let posts = builder
            .build_query_as::<Post>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn find_post(&self, id: i32) -> StoreResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p LEFT JOIN teachers t ON t.id = p.teacher_id \
             WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[instrument(skip(self, post), fields(teacher_id = post.teacher_id))]
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let created = sqlx::query_as::<_, Post>(&format!(
            r#"
            WITH p AS (
                INSERT INTO posts (title, content, category_id, teacher_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $5)
                RETURNING *
            )
            SELECT {POST_COLUMNS} FROM p LEFT JOIN teachers t ON t.id = p.teacher_id
            "#
        ))
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category_id)
        .bind(post.teacher_id)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[instrument(skip(self, changes))]
    async fn update_post(&self, id: i32, changes: PostChanges) -> StoreResult<Option<Post>> {
        let updated = sqlx::query_as::<_, Post>(&format!(
            r#"
            WITH p AS (
                UPDATE posts
                SET title = $1, content = $2, category_id = $3, updated_at = $4
                WHERE id = $5
                RETURNING *
            )
            SELECT {POST_COLUMNS} FROM p LEFT JOIN teachers t ON t.id = p.teacher_id
            "#
        ))
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.category_id)
        .bind(changes.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_accounts(&self, role: Role) -> StoreResult<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM {} ORDER BY id",
            account_table(role)
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    #[instrument(skip(self))]
    async fn find_account(&self, role: Role, id: i32) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM {} WHERE id = $1",
            account_table(role)
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    #[instrument(skip(self))]
    async fn find_account_by_email(
        &self,
        role: Role,
        email: &str,
    ) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM {} WHERE email = $1",
            account_table(role)
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn insert_account(&self, role: Role, account: NewAccount) -> StoreResult<Account> {
        let created = sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO {} (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING {ACCOUNT_COLUMNS}",
            account_table(role)
        ))
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[instrument(skip(self, changes))]
    async fn update_account(
        &self,
        role: Role,
        id: i32,
        changes: AccountChanges,
    ) -> StoreResult<Option<Account>> {
        let updated = sqlx::query_as::<_, Account>(&format!(
            "UPDATE {} SET name = $1, email = $2, password_hash = COALESCE($3, password_hash) \
             WHERE id = $4 RETURNING {ACCOUNT_COLUMNS}",
            account_table(role)
        ))
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(changes.password_hash.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, role: Role, id: i32) -> StoreResult<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", account_table(role)))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
