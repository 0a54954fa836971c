//! Pagination, sorting and search parameters for list endpoints.
//!
//! List endpoints accept `page`, `limit`, `sort` and `order` query
//! parameters (and `q` for search). Normalization is total: any input,
//! including garbage or missing values, maps to bounded values.
//!
//! - `page`: leading integer, default 1, minimum 1
//! - `limit`: leading integer, default 10, clamped to [1, 100]
//! - `sort`: one of `createdAt`, `updatedAt`, `title`; anything else is `createdAt`
//! - `order`: `asc` (any case) is ascending; anything else is descending
//!
//! # Example
//!
//! ```ignore
//! async fn list_posts(params: QueryParams) -> Result<Json<Page<Post>>, AppError> {
//!     let request = params.page_request();
//!     // request.limit in 1..=100, request.offset = (page - 1) * limit
//! }
//! ```

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Serialize;

use crate::params::parse_leading_int;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Raw query parameters, kept as strings until normalized.
///
/// When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl QueryParams {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_PAGE)
            .max(1)
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT)
    }

    /// `(page - 1) * limit`, saturating for absurd page numbers.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    #[must_use]
    pub fn sort(&self) -> SortColumn {
        SortColumn::parse(self.sort.as_deref())
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        SortOrder::parse(self.order.as_deref())
    }

    /// Trimmed search term, or `None` when absent or blank.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
    }

    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page(),
            limit: self.limit(),
            offset: self.offset(),
            sort: self.sort(),
            order: self.order(),
        }
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self::from_pairs(pairs))
    }
}

/// Sortable post columns. Unknown names fall back to `CreatedAt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortColumn {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("updatedAt") => Self::UpdatedAt,
            Some("title") => Self::Title,
            _ => Self::CreatedAt,
        }
    }

    /// Database column backing this sort key.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(order) if order.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Normalized paging window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
    pub sort: SortColumn,
    pub order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        QueryParams::default().page_request()
    }
}

/// `{"total": n, "items": [...]}` list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub total: i64,
    pub items: Vec<T>,
}
