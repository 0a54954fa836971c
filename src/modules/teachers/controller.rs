use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use educapost_auth::Role;
use educapost_core::AppError;
use educapost_models::{AccountList, AccountPayload, AccountProfile};

use crate::extract::{JsonBody, PathId};
use crate::middleware::auth::CurrentTeacher;
use crate::modules::accounts::AccountService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<AccountList>, AppError> {
    let teachers = AccountService::list_accounts(state.store.as_ref(), Role::Teacher).await?;
    Ok(Json(teachers))
}

#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<AccountProfile>, AppError> {
    let teacher = AccountService::get_account(state.store.as_ref(), Role::Teacher, id).await?;
    Ok(Json(teacher))
}

#[instrument(skip_all)]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<(StatusCode, Json<AccountProfile>), AppError> {
    let teacher =
        AccountService::create_account(state.store.as_ref(), Role::Teacher, payload).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[instrument(skip(state, payload))]
pub async fn update_teacher(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<Json<AccountProfile>, AppError> {
    let teacher =
        AccountService::update_account(state.store.as_ref(), Role::Teacher, id, payload).await?;
    Ok(Json(teacher))
}

#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, AppError> {
    AccountService::delete_account(state.store.as_ref(), Role::Teacher, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_me(CurrentTeacher(teacher): CurrentTeacher) -> Json<AccountProfile> {
    Json(teacher.into())
}

#[instrument(skip_all, fields(teacher_id = teacher.id))]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<Json<AccountProfile>, AppError> {
    let updated =
        AccountService::update_account(state.store.as_ref(), Role::Teacher, teacher.id, payload)
            .await?;
    Ok(Json(updated))
}

#[instrument(skip_all, fields(teacher_id = teacher.id))]
pub async fn delete_me(
    State(state): State<AppState>,
    CurrentTeacher(teacher): CurrentTeacher,
) -> Result<StatusCode, AppError> {
    AccountService::delete_account(state.store.as_ref(), Role::Teacher, teacher.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
