//! Development data for a fresh database.
//!
//! Each step only runs when its table is empty, so `seed` is safe to re-run.

mod accounts;
mod categories;
mod posts;

use std::time::Instant;

use anyhow::{Result, anyhow};
use sqlx::PgPool;

use educapost_auth::Role;
use educapost_core::hash_password;
use educapost_db::PgStore;

pub use accounts::{AccountSeed, generate_accounts};
pub use categories::{CategorySeed, DEFAULT_CATEGORIES};
pub use posts::{WELCOME_CONTENT, WELCOME_TITLE};

/// Password given to every seeded account unless overridden.
pub const SEED_PASSWORD: &str = "senha123";
pub const SEED_TEACHER_EMAIL: &str = "professor@educapost.dev";
pub const SEED_STUDENT_EMAIL: &str = "aluno@educapost.dev";

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub password: String,
    /// Fake teachers created alongside the default one.
    pub extra_teachers: usize,
    /// Fake students created alongside the default one.
    pub extra_students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            password: SEED_PASSWORD.to_string(),
            extra_teachers: 0,
            extra_students: 0,
        }
    }
}

impl SeedConfig {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn with_extras(mut self, teachers: usize, students: usize) -> Self {
        self.extra_teachers = teachers;
        self.extra_students = students;
        self
    }
}

/// Rows inserted by one [`seed_if_empty`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: u64,
    pub teachers: usize,
    pub students: usize,
    pub posts: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Inserts categories, accounts and a welcome post into whichever tables are empty.
pub async fn seed_if_empty(pool: &PgPool, config: &SeedConfig) -> Result<SeedSummary> {
    let start_time = Instant::now();
    let store = PgStore::new(pool.clone());
    let mut summary = SeedSummary::default();

    if count_rows(pool, "categories").await? == 0 {
        summary.categories = categories::seed_categories(pool).await?;
        println!("   ✓ Inserted {} categories", summary.categories);
    }

    let password_hash = hash_password(&config.password)
        .map_err(|err| anyhow!("Failed to hash password: {}", err.message))?;

    if count_rows(pool, "teachers").await? == 0 {
        let seeds = generate_accounts(
            Role::Teacher,
            SEED_TEACHER_EMAIL,
            config.extra_teachers,
            &password_hash,
        );
        summary.teachers = accounts::insert_accounts(&store, Role::Teacher, seeds).await?;
        println!("   ✓ Inserted {} teachers", summary.teachers);
    }

    if count_rows(pool, "students").await? == 0 {
        let seeds = generate_accounts(
            Role::Student,
            SEED_STUDENT_EMAIL,
            config.extra_students,
            &password_hash,
        );
        summary.students = accounts::insert_accounts(&store, Role::Student, seeds).await?;
        println!("   ✓ Inserted {} students", summary.students);
    }

    if count_rows(pool, "posts").await? == 0 {
        summary.posts = posts::seed_welcome_post(&store).await?;
        println!("   ✓ Inserted {} posts", summary.posts);
    }

    println!("   Seeding finished in {:?}", start_time.elapsed());
    Ok(summary)
}

async fn count_rows(pool: &PgPool, table: &'static str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
}
