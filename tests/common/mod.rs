#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use educapost::router::init_router;
use educapost::state::AppState;
use educapost_auth::{Role, create_token};
use educapost_config::JwtConfig;
use educapost_core::hash_password_with_cost;
use educapost_db::{MemoryStore, Store};
use educapost_models::{Account, NewAccount, NewPost, Post};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "senha123";

pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub state: AppState,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), test_jwt_config());
    TestApp {
        app: init_router(state.clone()),
        store,
        state,
    }
}

impl TestApp {
    /// Sends a request and returns the status with the decoded JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let body = match body {
            Some(body) => Body::from(serde_json::to_string(&body).unwrap()),
            None => Body::empty(),
        };
        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn create_teacher(&self, name: &str, email: &str) -> Account {
        create_test_account(&self.store, Role::Teacher, name, email).await
    }

    pub async fn create_student(&self, name: &str, email: &str) -> Account {
        create_test_account(&self.store, Role::Student, name, email).await
    }

    pub fn token_for(&self, role: Role, id: i32) -> String {
        create_token(role, id, &self.state.jwt_config).unwrap()
    }

    /// Inserts a post owned by `teacher_id`, created `minutes_ago` minutes in the past.
    pub async fn create_post(
        &self,
        teacher_id: i32,
        title: &str,
        content: &str,
        minutes_ago: i64,
    ) -> Post {
        self.store
            .insert_post(NewPost {
                title: title.to_string(),
                content: content.to_string(),
                category_id: None,
                teacher_id,
                created_at: minutes_before_now(minutes_ago),
            })
            .await
            .unwrap()
    }
}

/// Accounts are hashed with the minimum bcrypt cost to keep tests fast.
pub async fn create_test_account(
    store: &MemoryStore,
    role: Role,
    name: &str,
    email: &str,
) -> Account {
    store
        .insert_account(
            role,
            NewAccount {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: hash_password_with_cost(TEST_PASSWORD, 4).unwrap(),
            },
        )
        .await
        .unwrap()
}

pub fn minutes_before_now(minutes: i64) -> DateTime<Utc> {
    (Utc::now() - Duration::minutes(minutes)).trunc_subsecs(6)
}

pub fn titles(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}
