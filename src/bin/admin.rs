//! CLI administration tool for tinylink.
//!
//! Manages links and inspects the database without going through the HTTP
//! API. Uses the same services as the server, so validation and the code
//! allocation policy are identical.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Create a link (random or custom code)
//! cargo run --bin admin -- link create https://example.com --code promo24
//!
//! # Delete a link
//! cargo run --bin admin -- link delete promo24
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`tinylink::config`].

use tinylink::application::services::LinkService;
use tinylink::config;
use tinylink::domain::entities::Link;
use tinylink::infrastructure::persistence::{PgLinkRepository, pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a new link
    Create {
        /// Target URL
        target_url: String,

        /// Custom code (6-8 alphanumeric characters)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Code of the link to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply the schema
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = pool::connect(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Create { target_url, code } => {
            let link = service.create_link(target_url, code).await?;

            println!("{}", "Link created".green().bold());
            println!();
            print_link(&link);
            println!();
        }
        LinkAction::Delete { code, yes } => delete_link(&service, code, yes).await?,
    }

    Ok(())
}

/// Lists all links in a table.
///
/// # Output Format
///
/// ```text
///   Code      Clicks  Last clicked      Created           Target
///   ---------------------------------------------------------------------------
///   promo24   12      2025-01-16 14:20  2025-01-15 10:30  https://example.com
/// ```
async fn list_links(service: &LinkService<PgLinkRepository>) -> Result<()> {
    let links = service.list_links().await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- link create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last clicked".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        let last_clicked = link
            .last_clicked
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<9} {:<7} {:<17} {:<17} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            last_clicked.bright_black(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(
    service: &LinkService<PgLinkRepository>,
    code: String,
    skip_confirm: bool,
) -> Result<()> {
    let link = service.get_link_by_code(&code).await?;

    print_link(&link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service.delete_link(&code).await?;

    println!("{}", "Link deleted".green().bold());
    println!();

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:    {}", link.code.cyan());
    println!("  Target:  {}", link.target_url);
    println!("  Clicks:  {}", link.total_clicks.to_string().bright_green());
    println!(
        "  Created: {}",
        link.created_at.to_rfc3339().bright_black()
    );
}

/// Displays link and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let (links_count, clicks_count): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(total_clicks), 0)::BIGINT FROM links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            pool::migrate(pool).await?;

            println!("{}", "Schema is up to date".green().bold());
        }
    }

    Ok(())
}
