use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use educapost_core::{AppError, Page, QueryParams};
use educapost_models::{Post, PostPayload};

use crate::extract::{JsonBody, PathId};
use crate::middleware::auth::CurrentTeacher;
use crate::modules::posts::service::PostService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Page<Post>>, AppError> {
    let page = PostService::list_posts(state.store.as_ref(), params.page_request()).await?;
    Ok(Json(page))
}

#[instrument(skip(state))]
pub async fn search_posts(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Page<Post>>, AppError> {
    let page = PostService::search_posts(
        state.store.as_ref(),
        params.search_term(),
        params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Post>, AppError> {
    let post = PostService::get_post(state.store.as_ref(), id).await?;
    Ok(Json(post))
}

#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
    JsonBody(payload): JsonBody<PostPayload>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = PostService::create_post(state.store.as_ref(), &teacher, payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip(state, teacher, payload))]
pub async fn update_post(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<PostPayload>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::update_post(state.store.as_ref(), &teacher, id, payload).await?;
    Ok(Json(post))
}

#[instrument(skip(state, teacher))]
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
    PathId(id): PathId,
) -> Result<StatusCode, AppError> {
    PostService::delete_post(state.store.as_ref(), &teacher, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
