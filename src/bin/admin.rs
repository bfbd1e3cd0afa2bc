//! CLI administration tool for linkboard.
//!
//! Seeds default categories, prints statistics, and performs database
//! checks without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Create the default categories
//! cargo run --bin admin -- seed
//!
//! # Seed specific categories without a prompt
//! cargo run --bin admin -- seed Work Reading --yes
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
//! Reads the same variables as the server (see `linkboard::config`); only
//! `DATABASE_URL` and the pool settings matter here.

use linkboard::application::services::CategoryService;
use linkboard::config;
use linkboard::error::AppError;
use linkboard::infrastructure::persistence::SqliteCategoryRepository;
use linkboard::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Categories created by `seed` when none are named.
const DEFAULT_CATEGORIES: &[&str] = &["Category"];

/// CLI tool for managing linkboard.
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
    /// Create default categories that do not exist yet
    Seed {
        /// Category names (defaults to "Category")
        names: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Seed { names, yes } => handle_seed(names, yes, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Creates the given categories, skipping names that already exist.
///
/// # Flow
///
/// 1. Fall back to [`DEFAULT_CATEGORIES`] when no names are given
/// 2. Confirm (unless `--yes` flag)
/// 3. Create each category, reporting existing ones as skipped
async fn handle_seed(names: Vec<String>, skip_confirm: bool, pool: &SqlitePool) -> Result<()> {
    println!("{}", "🌱 Seed Categories".bright_blue().bold());
    println!();

    let names = if names.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|n| n.to_string()).collect()
    } else {
        names
    };

    for name in &names {
        println!("  {}", name.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create these categories?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = CategoryService::new(Arc::new(SqliteCategoryRepository::new(Arc::new(
        pool.clone(),
    ))));

    let mut created = 0;
    for name in &names {
        match service.create_category(name).await {
            Ok(category) => {
                created += 1;
                println!(
                    "  {} {} (id {})",
                    "✅".green(),
                    category.name.cyan(),
                    category.id
                );
            }
            Err(AppError::Conflict { .. }) => {
                println!("  {} {} already exists", "⏭ ".yellow(), name.cyan());
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to create '{}': {}", name, e)),
        }
    }

    println!();
    println!(
        "{}",
        format!("Default categories added! ({} new)", created)
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of short links and their total clicks
/// - Number of categories and organizer links
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let short_links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await?;

    let clicks: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0) FROM short_links")
        .fetch_one(pool)
        .await?;

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short links:  {}",
        short_links.to_string().bright_green().bold()
    );
    println!("  Clicks:       {}", clicks.to_string().bright_green().bold());
    println!(
        "  Categories:   {}",
        categories.to_string().bright_green().bold()
    );
    println!("  Links:        {}", links.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:     {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
