use axum::{Router, middleware, routing::get};

use crate::middleware::auth::{require_student, require_teacher};
use crate::modules::students::controller::{
    create_student, delete_me, delete_student, get_me, get_student, list_students, update_me,
    update_student,
};
use crate::state::AppState;

/// `/me` belongs to the signed-in student; the rest is managed by teachers.
pub fn init_students_router(state: AppState) -> Router<AppState> {
    let own_account = Router::new()
        .route("/me", get(get_me).put(update_me).delete(delete_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_student,
        ));

    let managed = Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route_layer(middleware::from_fn_with_state(state, require_teacher));

    own_account.merge(managed)
}
