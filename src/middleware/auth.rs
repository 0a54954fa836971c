use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use educapost_auth::{Principal, Role, verify_token};
use educapost_core::AppError;
use educapost_models::Account;

use crate::state::AppState;

pub const AUTH_REQUIRED: &str = "Authentication required";

/// The authenticated principal and its account row.
///
/// Exactly one of `teacher` / `student` is set, matching `principal.role`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub principal: Principal,
    pub teacher: Option<Account>,
    pub student: Option<Account>,
}

impl AuthContext {
    pub fn account(&self) -> Option<&Account> {
        self.teacher.as_ref().or(self.student.as_ref())
    }
}

#[derive(Debug, Clone)]
pub struct CurrentTeacher(pub Account);

#[derive(Debug, Clone)]
pub struct CurrentStudent(pub Account);

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

/// Resolves the request's principal.
///
/// Failures are reported in a fixed order: missing bearer token (401),
/// invalid or expired token (401), wrong role (403, before any lookup),
/// missing account row (401), then store failure (500).
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
    required: Option<Role>,
) -> Result<AuthContext, AppError> {
    let token = bearer_token(headers).ok_or_else(|| AppError::unauthorized(AUTH_REQUIRED))?;

    let principal = verify_token(token, &state.jwt_config)?.principal();

    if let Some(role) = required
        && principal.role != role
    {
        return Err(AppError::forbidden(format!("{} role required", role.label())));
    }

    let account = state
        .store
        .find_account(principal.role, principal.id)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(format!("{} not found", principal.role.label())))?;

    let (teacher, student) = match principal.role {
        Role::Teacher => (Some(account), None),
        Role::Student => (None, Some(account)),
    };

    Ok(AuthContext {
        principal,
        teacher,
        student,
    })
}

pub async fn require_role(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    required: Option<Role>,
) -> Result<Response, AppError> {
    let context = authenticate(&state, req.headers(), required).await?;

    if let Some(teacher) = &context.teacher {
        req.extensions_mut().insert(CurrentTeacher(teacher.clone()));
    }
    if let Some(student) = &context.student {
        req.extensions_mut().insert(CurrentStudent(student.clone()));
    }
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Either role.
pub async fn require_authenticated(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_role(State(state), req, next, None).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, Some(Role::Teacher)).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, Some(Role::Student)).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

fn from_extensions<T>(parts: &Parts) -> Result<T, AppError>
where
    T: Clone + Send + Sync + 'static,
{
    parts
        .extensions
        .get::<T>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized(AUTH_REQUIRED))
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        from_extensions(parts)
    }
}

impl<S> FromRequestParts<S> for CurrentTeacher
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        from_extensions(parts)
    }
}

impl<S> FromRequestParts<S> for CurrentStudent
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        from_extensions(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{HeaderValue, StatusCode};
    use educapost_auth::create_token;
    use educapost_config::JwtConfig;
    use educapost_db::{MemoryStore, Store};
    use educapost_models::NewAccount;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    async fn setup() -> (Arc<MemoryStore>, AppState, Account) {
        let store = Arc::new(MemoryStore::new());
        let teacher = store
            .insert_account(
                Role::Teacher,
                NewAccount {
                    name: "Profa. Clara".to_string(),
                    email: "clara@educapost.dev".to_string(),
                    password_hash: "hash".to_string(),
                },
            )
            .await
            .unwrap();
        store.reset_counters();
        let state = AppState::new(store.clone(), jwt_config());
        (store, state, teacher)
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_missing_header_is_authentication_required() {
        let (store, state, _) = setup().await;
        let err = authenticate(&state, &HeaderMap::new(), None)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, AUTH_REQUIRED);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_authentication_required() {
        let (_, state, _) = setup().await;
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        let err = authenticate(&state, &headers, None).await.unwrap_err();
        assert_eq!(err.message, AUTH_REQUIRED);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        let err = authenticate(&state, &headers, None).await.unwrap_err();
        assert_eq!(err.message, AUTH_REQUIRED);
    }

    #[tokio::test]
    async fn test_bad_signature_is_invalid_token() {
        let (store, state, teacher) = setup().await;
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..jwt_config()
        };
        let token = create_token(Role::Teacher, teacher.id, &other).unwrap();

        let err = authenticate(&state, &bearer(&token), Some(Role::Teacher))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Invalid or expired token");
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_role_checked_before_lookup() {
        let (store, state, _) = setup().await;
        let token = create_token(Role::Student, 999, &state.jwt_config).unwrap();

        let err = authenticate(&state, &bearer(&token), Some(Role::Teacher))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message, "Teacher role required");
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_row_is_not_found_401() {
        let (_, state, _) = setup().await;
        let token = create_token(Role::Student, 42, &state.jwt_config).unwrap();

        let err = authenticate(&state, &bearer(&token), Some(Role::Student))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Student not found");
    }

    #[tokio::test]
    async fn test_store_failure_is_database_error() {
        let (store, state, teacher) = setup().await;
        let token = create_token(Role::Teacher, teacher.id, &state.jwt_config).unwrap();
        store.set_unavailable(true);

        let err = authenticate(&state, &bearer(&token), Some(Role::Teacher))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Database error");
    }

    #[tokio::test]
    async fn test_teacher_context_attached() {
        let (_, state, teacher) = setup().await;
        let token = create_token(Role::Teacher, teacher.id, &state.jwt_config).unwrap();

        let context = authenticate(&state, &bearer(&token), None).await.unwrap();
        assert_eq!(context.principal.role, Role::Teacher);
        assert_eq!(context.principal.id, teacher.id);
        assert_eq!(context.teacher.as_ref(), Some(&teacher));
        assert!(context.student.is_none());
        assert_eq!(context.account(), Some(&teacher));
    }

    #[tokio::test]
    async fn test_expired_token_is_invalid() {
        let (_, state, teacher) = setup().await;
        let expired = JwtConfig {
            access_token_expiry: -60,
            ..jwt_config()
        };
        let token = create_token(Role::Teacher, teacher.id, &expired).unwrap();

        let err = authenticate(&state, &bearer(&token), None)
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid or expired token");
    }
}
