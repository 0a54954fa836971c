//! # EducaPost Core
//!
//! Core types, errors, and utilities for the EducaPost API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Query normalization for paginated, sorted and searched lists
//! - [`params`]: Lenient integer parsing for query strings and path ids
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use educapost_core::{AppError, QueryParams, parse_id};
//!
//! let id = parse_id("42").ok_or_else(|| AppError::bad_request("Invalid id"))?;
//! let window = QueryParams::default().page_request();
//! assert_eq!(window.limit, 10);
//! ```

pub mod errors;
pub mod pagination;
pub mod params;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{Page, PageRequest, QueryParams, SortColumn, SortOrder};
pub use params::{parse_id, parse_leading_int};
pub use password::{hash_password, hash_password_with_cost, verify_password};
