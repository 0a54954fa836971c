use axum::{Router, routing::get};

use crate::modules::categories::controller::{get_category, list_categories};
use crate::state::AppState;

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/{id}", get(get_category))
}
