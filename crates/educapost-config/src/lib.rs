//! # EducaPost Config
//!
//! Configuration types for the EducaPost API, loaded from environment variables.
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`database`]: connection string and pool sizing
//! - [`server`]: bind address and application name
//!
//! Every type also has a `from_vars` constructor taking a lookup function, so
//! tests can build configurations without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use educapost_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
