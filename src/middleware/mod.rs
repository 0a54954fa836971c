//! Authorization middleware.
//!
//! Protected route groups get exactly one of [`auth::require_authenticated`],
//! [`auth::require_teacher`] or [`auth::require_student`] as a `route_layer`.
//! On success the resolved principal is stored in the request extensions and
//! handlers read it back through the [`auth::AuthContext`],
//! [`auth::CurrentTeacher`] and [`auth::CurrentStudent`] extractors.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use crate::middleware::auth::{CurrentTeacher, require_teacher};
//!
//! async fn create_post(CurrentTeacher(teacher): CurrentTeacher) -> impl IntoResponse {
//!     // only reached with a valid teacher token whose row still exists
//! }
//!
//! let routes = Router::new()
//!     .route("/", post(create_post))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher));
//! ```

pub mod auth;
