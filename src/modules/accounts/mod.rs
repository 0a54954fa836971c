//! Account management shared by the teachers and students modules.

pub mod service;

pub use service::AccountService;
