use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use serde_json::Value;

use educapost_auth::Role;
use educapost_cli::accounts::create_account;
use educapost_cli::seeder::{self, SEED_STUDENT_EMAIL, SEED_TEACHER_EMAIL, SeedConfig};
use educapost_config::DatabaseConfig;
use educapost_db::{MIGRATOR, PgPool, PgStore, init_db_pool};
use educapost_models::AccountPayload;

#[derive(Parser)]
#[command(name = "educapost-cli")]
#[command(about = "EducaPost CLI - Administrative tools for EducaPost", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed categories, a teacher, a student and a welcome post into empty tables
    Seed {
        /// Password for every seeded account
        #[arg(short = 'p', long, default_value = seeder::SEED_PASSWORD)]
        password: String,

        /// Number of extra fake teachers
        #[arg(long, default_value = "0")]
        teachers: usize,

        /// Number of extra fake students
        #[arg(long, default_value = "0")]
        students: usize,
    },
    /// Create a new teacher account
    CreateTeacher(AccountArgs),
    /// Create a new student account
    CreateStudent(AccountArgs),
}

#[derive(Args)]
struct AccountArgs {
    /// Display name
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Email address
    #[arg(short = 'e', long)]
    email: Option<String>,

    /// Password (will be prompted securely if not provided)
    #[arg(short = 'p', long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = DatabaseConfig::from_env()?;

    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed {
            password,
            teachers,
            students,
        } => handle_seed(&pool, password, teachers, students).await,
        Commands::CreateTeacher(args) => handle_create_account(&pool, Role::Teacher, args).await,
        Commands::CreateStudent(args) => handle_create_account(&pool, Role::Student, args).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_seed(
    pool: &PgPool,
    password: String,
    teachers: usize,
    students: usize,
) -> Result<()> {
    println!("🌱 Seeding database...");

    let config = SeedConfig::new(password).with_extras(teachers, students);
    let summary = seeder::seed_if_empty(pool, &config).await?;

    if summary.is_empty() {
        println!("✅ Nothing to seed, every table already has data");
        return Ok(());
    }

    println!("\n✅ Database seeded successfully!");
    if summary.teachers > 0 {
        println!("   Teacher: {} / {}", SEED_TEACHER_EMAIL, config.password);
    }
    if summary.students > 0 {
        println!("   Student: {} / {}", SEED_STUDENT_EMAIL, config.password);
    }
    Ok(())
}

async fn handle_create_account(pool: &PgPool, role: Role, args: AccountArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match args.email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let payload = AccountPayload {
        name: Some(Value::String(name)),
        email: Some(Value::String(email)),
        password: Some(Value::String(password)),
    };

    let store = PgStore::new(pool.clone());
    let profile = create_account(&store, role, &payload).await?;

    println!("\n✅ {} created successfully!", role.label());
    println!("   Id: {}", profile.id);
    println!("   Email: {}", profile.email);
    println!("   Name: {}", profile.name);
    Ok(())
}
