//! CLI administration tool for fleet-api.
//!
//! Provides commands for managing administrators, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new administrator
//! cargo run --bin admin -- administrator create --email ops@teste.com --role editor
//!
//! # List administrators, optionally one page of 10
//! cargo run --bin admin -- administrator list --page 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Administrator Management**: Create and list administrators
//! - **Statistics**: View administrator and vehicle counts
//! - **Database Tools**: Connection checks, info queries, migrations
//! - **Interactive Prompts**: Missing fields are asked for, creation is confirmed

use fleet_api::api::dto::AdministratorRequest;
use fleet_api::api::validation::validate_administrator;
use fleet_api::domain::entities::{NewAdministrator, Page, Role};
use fleet_api::domain::repositories::AdministratorRepository;
use fleet_api::infrastructure::persistence::PgAdministratorRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing fleet-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage administrators
    Administrator {
        #[command(subcommand)]
        action: AdministratorAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Administrator management subcommands.
#[derive(Subcommand)]
enum AdministratorAction {
    /// Create a new administrator
    Create {
        /// Login email
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Role: admin or editor
        #[arg(short, long)]
        role: Option<Role>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List administrators
    List {
        /// 1-indexed page of 10 (all administrators if omitted)
        #[arg(short, long)]
        page: Option<u32>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Administrator { action } => handle_administrator_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches administrator management commands.
async fn handle_administrator_action(action: AdministratorAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgAdministratorRepository::new(Arc::new(pool.clone())));

    match action {
        AdministratorAction::Create {
            email,
            password,
            role,
            yes,
        } => {
            create_administrator(repo, email, password, role, yes).await?;
        }
        AdministratorAction::List { page } => {
            list_administrators(repo, page).await?;
        }
    }

    Ok(())
}

/// Creates an administrator with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for any field not given on the command line
/// 2. Apply the same rules as `POST /administrators`
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store in database
async fn create_administrator(
    repo: Arc<PgAdministratorRepository>,
    email: Option<String>,
    password: Option<String>,
    role: Option<Role>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Administrator".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let role = match role {
        Some(r) => r,
        None => {
            let labels: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
            let selected = Select::new()
                .with_prompt("Role")
                .items(&labels)
                .default(1)
                .interact()?;
            Role::ALL[selected]
        }
    };

    let request = AdministratorRequest {
        email,
        password,
        role: Some(role),
    };

    let messages = validate_administrator(&request);
    if !messages.is_empty() {
        for message in messages.messages() {
            println!("  {} {}", "✗".red(), message);
        }
        anyhow::bail!("Invalid administrator");
    }

    println!();
    println!("{}", "Administrator details:".bright_white().bold());
    println!("  Email: {}", request.email.cyan());
    println!("  Role:  {}", role.as_str().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this administrator?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let administrator = repo
        .create(NewAdministrator {
            email: request.email,
            password: request.password,
            role,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create administrator: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Administrator created successfully!".green().bold(),
        administrator.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST http://localhost:3000/administrators/login -H 'Content-Type: application/json' -d '{{\"email\":\"{}\",\"password\":\"...\"}}'",
        administrator.email.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all administrators.
///
/// # Output Format
///
/// ```text
/// 📋 Administrators
///
///   ID  Email                          Role
///   ─────────────────────────────────────────────
///   1   adm@teste.com                  admin
///   2   editor@teste.com               editor
/// ```
async fn list_administrators(
    repo: Arc<PgAdministratorRepository>,
    page: Option<u32>,
) -> Result<()> {
    println!("{}", "📋 Administrators".bright_blue().bold());
    println!();

    let page = match page {
        Some(number) => Some(Page::new(number).context("Page must be greater than 0")?),
        None => None,
    };

    let administrators = repo
        .list(page)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list administrators: {}", e))?;

    if administrators.is_empty() {
        println!("{}", "  No administrators found".yellow());
        println!();
        println!(
            "  Create one with: {} admin administrator create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(45).bright_black());

    for administrator in &administrators {
        let role = match administrator.role {
            Role::Admin => administrator.role.as_str().red(),
            Role::Editor => administrator.role.as_str().green(),
        };

        println!(
            "  {:<3} {:<30} {}",
            administrator.id.to_string().bright_black(),
            administrator.email.cyan(),
            role
        );
    }

    println!();
    println!(
        "  Total: {}",
        administrators.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays record counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let administrators_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM administrators")
        .fetch_one(pool)
        .await?;

    let editors_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM administrators WHERE role = 'editor'")
            .fetch_one(pool)
            .await?;

    let vehicles_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
        .fetch_one(pool)
        .await?;

    println!(
        "  Administrators: {} ({} editors)",
        administrators_count.to_string().bright_green().bold(),
        editors_count.to_string().bright_white()
    );
    println!(
        "  Vehicles:       {}",
        vehicles_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
