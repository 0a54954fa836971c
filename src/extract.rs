//! Request extractors shared by the feature modules.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use educapost_core::{AppError, parse_id};

pub const INVALID_ID: &str = "Invalid id";
pub const INVALID_BODY: &str = "Invalid request body";

/// JSON body that tolerates a missing or empty payload.
///
/// An empty body becomes `T::default()`, so handlers report field-level
/// validation errors instead of a parse failure. A body that is not a JSON
/// object matching `T` is rejected with 400 "Invalid request body".
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_BODY))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value)
                .map(Self)
                .map_err(|_| AppError::bad_request(INVALID_BODY)),
            _ => Err(AppError::bad_request(INVALID_BODY)),
        }
    }
}

/// The `{id}` path segment as a positive 32-bit id.
///
/// Uses leading-integer parsing (`"15-intro"` is 15); anything that does not
/// yield an id in `1..=i32::MAX` is a 400 "Invalid id".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_ID))?;

        parse_id(&raw)
            .map(Self)
            .ok_or_else(|| AppError::bad_request(INVALID_ID))
    }
}
