use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_authenticated;
use crate::modules::auth::controller::{login, me};
use crate::state::AppState;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new().route("/login", post(login)).merge(
        Router::new()
            .route("/me", get(me))
            .route_layer(middleware::from_fn_with_state(state, require_authenticated)),
    )
}
