//! Post categories.

use serde::Serialize;
use sqlx::FromRow;

/// A category posts can be filed under.
///
/// `order` is the display sort key. Inactive categories stay readable by id
/// but cannot be referenced by new or edited posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub label: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub is_active: bool,
}

/// `{"items": [...]}` envelope for the category list.
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub items: Vec<Category>,
}
