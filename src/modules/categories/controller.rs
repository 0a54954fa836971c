use axum::{Json, extract::State};
use tracing::instrument;

use educapost_core::AppError;
use educapost_models::{Category, CategoryList};

use crate::extract::PathId;
use crate::modules::categories::service::CategoryService;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryList>, AppError> {
    let categories = CategoryService::list_categories(state.store.as_ref()).await?;
    Ok(Json(categories))
}

#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::get_category(state.store.as_ref(), id).await?;
    Ok(Json(category))
}
