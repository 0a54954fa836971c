//! Application error type rendered as JSON responses.
//!
//! Every handler returns `Result<_, AppError>`. Client-facing errors carry a
//! fixed message (and, for validation failures, an ordered list of field
//! errors); server-side failures keep their source for logging only.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const DATABASE_ERROR: &str = "Database error";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
    pub source: Option<Error>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 400 with `{"message": "Validation failed", "errors": [...]}`.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::bad_request(VALIDATION_FAILED)
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Store failure. The client only ever sees "Database error".
    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            source: Some(err.into()),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR)
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            source: Some(err.into()),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(error = ?source, "{}", self.message),
                None => tracing::error!("{}", self.message),
            }
        }

        let body = if self.errors.is_empty() {
            json!({ "message": self.message })
        } else {
            json!({ "message": self.message, "errors": self.errors })
        };

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::database(err)
    }
}
