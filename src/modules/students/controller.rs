use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use educapost_auth::Role;
use educapost_core::AppError;
use educapost_models::{AccountList, AccountPayload, AccountProfile};

use crate::extract::{JsonBody, PathId};
use crate::middleware::auth::CurrentStudent;
use crate::modules::accounts::AccountService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<AccountList>, AppError> {
    let students = AccountService::list_accounts(state.store.as_ref(), Role::Student).await?;
    Ok(Json(students))
}

#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<AccountProfile>, AppError> {
    let student = AccountService::get_account(state.store.as_ref(), Role::Student, id).await?;
    Ok(Json(student))
}

#[instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<(StatusCode, Json<AccountProfile>), AppError> {
    let student =
        AccountService::create_account(state.store.as_ref(), Role::Student, payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[instrument(skip(state, payload))]
pub async fn update_student(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<Json<AccountProfile>, AppError> {
    let student =
        AccountService::update_account(state.store.as_ref(), Role::Student, id, payload).await?;
    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, AppError> {
    AccountService::delete_account(state.store.as_ref(), Role::Student, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_me(CurrentStudent(student): CurrentStudent) -> Json<AccountProfile> {
    Json(student.into())
}

#[instrument(skip_all, fields(student_id = student.id))]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentStudent(student): CurrentStudent,
    JsonBody(payload): JsonBody<AccountPayload>,
) -> Result<Json<AccountProfile>, AppError> {
    let updated =
        AccountService::update_account(state.store.as_ref(), Role::Student, student.id, payload)
            .await?;
    Ok(Json(updated))
}

#[instrument(skip_all, fields(student_id = student.id))]
pub async fn delete_me(
    State(state): State<AppState>,
    CurrentStudent(student): CurrentStudent,
) -> Result<StatusCode, AppError> {
    AccountService::delete_account(state.store.as_ref(), Role::Student, student.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
