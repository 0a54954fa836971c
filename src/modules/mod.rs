pub mod accounts;
pub mod auth;
pub mod categories;
pub mod posts;
pub mod students;
pub mod teachers;
