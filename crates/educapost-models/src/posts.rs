//! Post entities, write payloads and their validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::validation::{char_len, positive_int, trimmed_field};

pub const TITLE_TOO_SHORT: &str = "title must be at least 3 characters";
pub const CONTENT_REQUIRED: &str = "content is required";
pub const CATEGORY_ID_INVALID: &str = "categoryId must be a positive integer when provided";

/// A published post.
///
/// `author` is the owning teacher's current name, resolved at read time.
/// It is `None` when the post has no owner (the teacher was removed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub category_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Fields stay untyped until [`PostPayload::validate`] runs. An `author`
/// key, if sent, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub category_id: Option<Value>,
}

/// Normalized post fields. `category_id` is `None` when no category was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
}

impl PostPayload {
    /// Checks title, content and categoryId, in that order.
    pub fn validate(&self) -> Result<PostFields, Vec<String>> {
        let mut errors = Vec::new();

        let title = trimmed_field(self.title.as_ref());
        if char_len(&title) < 3 {
            errors.push(TITLE_TOO_SHORT.to_string());
        }

        let content = trimmed_field(self.content.as_ref());
        if content.is_empty() {
            errors.push(CONTENT_REQUIRED.to_string());
        }

        let category_id = match self.category_id.as_ref() {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let parsed = positive_int(raw);
                if parsed.is_none() {
                    errors.push(CATEGORY_ID_INVALID.to_string());
                }
                parsed
            }
        };

        if errors.is_empty() {
            Ok(PostFields {
                title,
                content,
                category_id,
            })
        } else {
            Err(errors)
        }
    }
}

/// Row to insert. The store sets `updated_at` equal to `created_at`.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
    pub teacher_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of a post's editable fields.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

/// Predicate shared by the count and page queries of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    All,
    /// Case-insensitive substring match on title or content.
    Search(String),
}
