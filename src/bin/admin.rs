//! CLI administration tool for url-shortener.
//!
//! Shortens and resolves URLs, shows statistics and checks the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://www.freecodecamp.org
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve Aa1Bb2
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
//! Same as the server; see `url_shortener::config`. Without a database the
//! commands run against a throwaway in-memory store.

use url_shortener::application::services::DynShortenerService;
use url_shortener::config::{self, Config};
use url_shortener::error::AppError;
use url_shortener::server::{build_repository, build_service, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted if omitted)
        url: Option<String>,
    },

    /// Resolve a short code to its original URL
    Resolve {
        /// Short code to look up
        code: String,
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

    run(cli.command, &config).await
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Shorten { url } => {
            let service = service(config).await?;
            shorten(&service, url).await?
        }
        Commands::Resolve { code } => {
            let service = service(config).await?;
            resolve(&service, &code).await?
        }
        Commands::Stats => {
            let service = service(config).await?;
            handle_stats(&service).await?
        }
        Commands::Db { action } => handle_db_action(action, config).await?,
    }

    Ok(())
}

async fn service(config: &Config) -> Result<Arc<DynShortenerService>> {
    if !config.is_database_enabled() {
        println!(
            "{}",
            "⚠️  No database configured, using a temporary in-memory store".yellow()
        );
    }

    let repository = build_repository(config).await?;
    Ok(build_service(config, repository))
}

/// Shortens a URL, prompting for it when not given.
async fn shorten(service: &DynShortenerService, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let original_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    match service.shorten(&original_url).await {
        Ok(mapping) => {
            println!("  Original: {}", mapping.original_url.cyan());
            println!("  Code:     {}", mapping.short_code.bright_yellow().bold());
            println!();
            println!(
                "  {}",
                format!("/api/shorturl/{}", mapping.short_code).bright_white()
            );
            println!();
            Ok(())
        }
        Err(e @ AppError::InvalidUrl { .. }) => {
            println!("{} {}", "❌".red(), describe(&e).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

/// Looks up a short code.
async fn resolve(service: &DynShortenerService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(mapping) => {
            println!("  Code:     {}", mapping.short_code.bright_yellow());
            println!("  Original: {}", mapping.original_url.cyan());
            Ok(())
        }
        Err(e @ AppError::NotFound { .. }) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve code: {}", e)),
    }
}

/// Displays system statistics.
async fn handle_stats(service: &DynShortenerService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = service
        .mapping_count()
        .await
        .map_err(|e| anyhow::anyhow!("Storage error: {}", e))?;

    println!(
        "  Mappings: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = connect_pool(config, database_url).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Includes the validation reason for CLI users.
fn describe(e: &AppError) -> String {
    match e {
        AppError::InvalidUrl { reason } => format!("{}: {}", e, reason),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> Config {
        let config = Config::default();
        assert!(!config.is_database_enabled());
        config
    }

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["admin", "shorten", "https://example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Shorten { url: Some(ref u) } if u == "https://example.com"));

        let cli = Cli::try_parse_from(["admin", "resolve", "Aa1Bb2"]).unwrap();
        assert!(matches!(cli.command, Commands::Resolve { ref code } if code == "Aa1Bb2"));

        let cli = Cli::try_parse_from(["admin", "db", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Db { action: DbAction::Check }));
    }

    #[tokio::test]
    async fn test_service_commands_run_in_memory() {
        let config = in_memory_config();

        run(
            Commands::Shorten {
                url: Some("https://www.freecodecamp.org".to_string()),
            },
            &config,
        )
        .await
        .unwrap();
        run(Commands::Resolve { code: "missing1".to_string() }, &config)
            .await
            .unwrap();
        run(Commands::Stats, &config).await.unwrap();
    }

    #[tokio::test]
    async fn test_shorten_then_resolve_share_a_service() {
        let service = service(&in_memory_config()).await.unwrap();

        shorten(&service, Some("https://example.com".to_string()))
            .await
            .unwrap();
        let code = service.shorten("https://example.com").await.unwrap().short_code;

        resolve(&service, &code).await.unwrap();
        assert_eq!(service.mapping_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_db_commands_require_database() {
        let result = run(Commands::Db { action: DbAction::Info }, &in_memory_config()).await;
        assert!(result.is_err());
    }
}
