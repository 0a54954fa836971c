use chrono::{SubsecRound, Utc};
use tracing::instrument;

use educapost_core::{AppError, Page, PageRequest};
use educapost_db::Store;
use educapost_models::{Account, NewPost, Post, PostChanges, PostFilter, PostPayload};

pub const POST_NOT_FOUND: &str = "Post not found";
pub const CATEGORY_NOT_ACTIVE: &str = "categoryId must reference an active category";
pub const ONLY_OWNER_CAN_EDIT: &str = "Only the post owner can edit it";
pub const ONLY_OWNER_CAN_DELETE: &str = "Only the post owner can delete it";
pub const SEARCH_TERM_REQUIRED: &str = "Query param q is required";

pub struct PostService;

impl PostService {
    #[instrument(skip(store))]
    pub async fn list_posts(store: &dyn Store, page: PageRequest) -> Result<Page<Post>, AppError> {
        Self::page_of(store, PostFilter::All, page).await
    }

    /// `term` must already be trimmed; a blank term is rejected before the store is touched.
    #[instrument(skip(store))]
    pub async fn search_posts(
        store: &dyn Store,
        term: Option<String>,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        let term = term.ok_or_else(|| AppError::bad_request(SEARCH_TERM_REQUIRED))?;
        Self::page_of(store, PostFilter::Search(term), page).await
    }

    #[instrument(skip(store))]
    pub async fn get_post(store: &dyn Store, id: i32) -> Result<Post, AppError> {
        store
            .find_post(id)
            .await?
            .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))
    }

    #[instrument(skip(store, teacher, payload), fields(teacher_id = teacher.id))]
    pub async fn create_post(
        store: &dyn Store,
        teacher: &Account,
        payload: PostPayload,
    ) -> Result<Post, AppError> {
        let fields = payload.validate().map_err(AppError::validation)?;
        Self::ensure_active_category(store, fields.category_id).await?;

        let post = store
            .insert_post(NewPost {
                title: fields.title,
                content: fields.content,
                category_id: fields.category_id,
                teacher_id: teacher.id,
                created_at: now(),
            })
            .await?;

        Ok(post)
    }

    /// Full replacement of title, content and category. Only the owner may edit.
    #[instrument(skip(store, teacher, payload), fields(teacher_id = teacher.id))]
    pub async fn update_post(
        store: &dyn Store,
        teacher: &Account,
        id: i32,
        payload: PostPayload,
    ) -> Result<Post, AppError> {
        let existing = Self::get_post(store, id).await?;
        if existing.teacher_id != Some(teacher.id) {
            return Err(AppError::forbidden(ONLY_OWNER_CAN_EDIT));
        }

        let fields = payload.validate().map_err(AppError::validation)?;
        Self::ensure_active_category(store, fields.category_id).await?;

        store
            .update_post(
                id,
                PostChanges {
                    title: fields.title,
                    content: fields.content,
                    category_id: fields.category_id,
                    updated_at: now().max(existing.created_at),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found(POST_NOT_FOUND))
    }

    #[instrument(skip(store, teacher), fields(teacher_id = teacher.id))]
    pub async fn delete_post(
        store: &dyn Store,
        teacher: &Account,
        id: i32,
    ) -> Result<(), AppError> {
        let existing = Self::get_post(store, id).await?;
        if existing.teacher_id != Some(teacher.id) {
            return Err(AppError::forbidden(ONLY_OWNER_CAN_DELETE));
        }

        if !store.delete_post(id).await? {
            return Err(AppError::not_found(POST_NOT_FOUND));
        }
        Ok(())
    }

    async fn page_of(
        store: &dyn Store,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<Page<Post>, AppError> {
        let total = store.count_posts(&filter).await?;
        let items = store.list_posts(&filter, &page).await?;
        Ok(Page { total, items })
    }

    async fn ensure_active_category(
        store: &dyn Store,
        category_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(id) = category_id
            && !store.is_active_category(id).await?
        {
            return Err(AppError::bad_request(CATEGORY_NOT_ACTIVE));
        }
        Ok(())
    }
}

/// Current time at the store's microsecond precision.
fn now() -> chrono::DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
