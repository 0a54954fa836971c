use axum::{Json, extract::State};
use tracing::instrument;

use educapost_core::AppError;
use educapost_models::{LoginRequest, LoginResponse, MeResponse};

use crate::extract::JsonBody;
use crate::middleware::auth::AuthContext;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.store.as_ref(), &state.jwt_config, request).await?;
    Ok(Json(response))
}

pub async fn me(context: AuthContext) -> Result<Json<MeResponse>, AppError> {
    AuthService::me(&context).map(Json)
}
