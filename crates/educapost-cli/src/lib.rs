//! # EducaPost CLI
//!
//! Administrative helpers used by the `educapost-cli` binary: account creation
//! and development seeding.
//!
//! ## Usage
//!
//! ```ignore
//! use educapost_cli::seeder::{seed_if_empty, SeedConfig};
//!
//! let summary = seed_if_empty(&pool, &SeedConfig::default()).await?;
//! println!("{} categories", summary.categories);
//! ```

pub mod accounts;
pub mod seeder;
