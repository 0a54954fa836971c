use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::auth::require_teacher;
use crate::modules::posts::controller::{
    create_post, delete_post, get_post, list_posts, search_posts, update_post,
};
use crate::state::AppState;

/// Reads are public; writes need a teacher.
pub fn init_posts_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_posts))
        .route("/search", get(search_posts))
        .route("/{id}", get(get_post));

    let teacher_only = Router::new()
        .route("/", post(create_post))
        .route("/{id}", put(update_post).delete(delete_post))
        .route_layer(middleware::from_fn_with_state(state, require_teacher));

    public.merge(teacher_only)
}
