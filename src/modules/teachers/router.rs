use axum::{Router, routing::get};

use crate::modules::teachers::controller::{
    create_teacher, delete_me, delete_teacher, get_me, get_teacher, list_teachers, update_me,
    update_teacher,
};
use crate::state::AppState;

/// Every route here expects the `require_teacher` layer.
pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route("/me", get(get_me).put(update_me).delete(delete_me))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}
