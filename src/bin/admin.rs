//! CLI administration tool for shortcode.
//!
//! Inspects and prepares the database without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Check the database can be opened
//! cargo run --bin admin -- db check
//!
//! # Create the generated_urls table
//! cargo run --bin admin -- db init
//!
//! # Show how many links are stored
//! cargo run --bin admin -- stats
//!
//! # Show the mapping behind a code
//! cargo run --bin admin -- lookup q0U
//!
//! # Convert between counter values and codes
//! cargo run --bin admin -- encode 100000
//! cargo run --bin admin -- decode q0U
//! ```
//!
//! # Environment Variables
//!
//! - `DB_PATH` (optional): SQLite file location, default `./data/database.db`

use shortcode::config::DEFAULT_DB_PATH;
use shortcode::domain::repositories::UrlMappingRepository;
use shortcode::infrastructure::persistence::SqliteUrlMappingRepository;
use shortcode::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shortcode.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite file location (overrides DB_PATH)
    #[arg(long, global = true)]
    db_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Show the mapping stored under a short code
    Lookup {
        /// Short code to look up
        code: String,
    },

    /// Print the short code for a counter value
    Encode {
        /// Counter value
        value: u64,
    },

    /// Print the counter value behind a short code
    Decode {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the database can be opened and queried
    Check,

    /// Create the generated_urls table if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let db_path = cli
        .db_path
        .or_else(|| std::env::var("DB_PATH").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    match cli.command {
        Commands::Encode { value } => handle_encode(value),
        Commands::Decode { code } => handle_decode(&code)?,
        Commands::Db { action } => {
            let repo = connect(&db_path).await?;
            handle_db_action(action, &repo, &db_path).await?;
        }
        Commands::Stats => {
            let repo = connect(&db_path).await?;
            handle_stats(&repo).await?;
        }
        Commands::Lookup { code } => {
            let repo = connect(&db_path).await?;
            handle_lookup(&repo, &code).await?;
        }
    }

    Ok(())
}

async fn connect(db_path: &str) -> Result<SqliteUrlMappingRepository> {
    SqliteUrlMappingRepository::connect(db_path, 1)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path))
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlMappingRepository,
    db_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(repo.pool()).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(repo.pool())
                .await?;

            println!("{}", "Database OK".green().bold());
            println!("  File:   {}", db_path.bright_white());
            println!("  SQLite: {}", version.bright_white());
        }
        DbAction::Init => {
            repo.init()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create schema: {}", e))?;

            println!("{}", "Schema ready".green().bold());
        }
    }

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(repo: &SqliteUrlMappingRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the mapping for `code`, or a notice if none exists.
async fn handle_lookup(repo: &SqliteUrlMappingRepository, code: &str) -> Result<()> {
    let mapping = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => {
            println!("  Code:    {}", mapping.short_code.cyan());
            println!("  URL:     {}", mapping.long_url.bright_white());
            println!("  ID:      {}", mapping.id.to_string().bright_black());
            println!(
                "  Created: {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .bright_black()
            );
        }
        None => {
            println!("{} {}", "No link stored under".yellow(), code.cyan());
        }
    }

    Ok(())
}

fn handle_encode(value: u64) {
    println!("{}", base62::encode(value));
}

fn handle_decode(code: &str) -> Result<()> {
    let value = base62::decode(code)
        .with_context(|| format!("'{}' is not a base-62 code that fits in 64 bits", code))?;

    println!("{}", value);

    Ok(())
}
