//! # EducaPost Auth
//!
//! Roles, token claims and JWT utilities for the EducaPost API.
//!
//! - [`claims`]: [`Role`], [`Claims`] and the request [`Principal`]
//! - [`jwt`]: token creation and verification
//!
//! A token carries only `{role, id}`; the account row is resolved from the
//! store on every request by the authorization middleware.

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, Principal, Role};
pub use jwt::{INVALID_TOKEN, create_token, verify_token};
