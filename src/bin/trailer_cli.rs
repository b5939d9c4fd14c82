//! CLI tool for the TMDB trailer addon.
//!
//! Runs trailer lookups against TMDB without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a trailer by IMDb id
//! cargo run --bin trailer-cli -- resolve movie tt0133093
//!
//! # Resolve by TMDB id, print the raw addon envelope
//! cargo run --bin trailer-cli -- resolve series tmdb:1399 --json
//!
//! # Print the addon manifest
//! cargo run --bin trailer-cli -- manifest
//!
//! # Validate configuration
//! cargo run --bin trailer-cli -- config check
//! ```
//!
//! # Environment Variables
//!
//! - `TMDB_API_KEY` (required for `resolve` and `config check`)

use tmdb_trailers::application::services::{MetaResponse, ResolveError, TrailerResolver};
use tmdb_trailers::config::{self, Config};
use tmdb_trailers::domain::entities::{ContentKind, LookupRequest, TrailerMeta};
use tmdb_trailers::domain::manifest::Manifest;
use tmdb_trailers::infrastructure::cache::NullCache;
use tmdb_trailers::infrastructure::tmdb::TmdbClient;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for the TMDB trailer addon.
#[derive(Parser)]
#[command(name = "trailer-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve the trailer of a title
    Resolve {
        /// Content type: movie or series
        kind: String,

        /// IMDb id (tt...) or TMDB id (603, tmdb:603)
        id: String,

        /// Print the addon JSON envelope instead of a summary
        #[arg(short, long)]
        json: bool,
    },

    /// Print the addon manifest
    Manifest,

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { kind, id, json } => handle_resolve(&kind, &id, json).await?,
        Commands::Manifest => print_manifest()?,
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
    }

    Ok(())
}

/// Resolves one title with caching disabled.
///
/// # Output Format
///
/// ```text
/// 🎬 Trailer lookup
///
///   Id:      tt0133093
///   Type:    movie
///   Trailer: https://www.youtube.com/watch?v=vKQi3bBA1y8
/// ```
async fn handle_resolve(kind: &str, id: &str, json: bool) -> Result<()> {
    let kind: ContentKind = kind.parse()?;
    let config = config::load_from_env()?;

    let provider = TmdbClient::new(
        config.tmdb_api_key.clone(),
        &config.tmdb_base_url,
        config.upstream_timeout(),
    )
    .context("Failed to create TMDB client")?;

    let resolver = TrailerResolver::new(
        Arc::new(provider),
        Arc::new(NullCache::new()),
        config.cache_ttl(),
    );

    let result = resolver.resolve(&LookupRequest::new(kind, id)).await;

    if json {
        let response = MetaResponse::from(result.ok());
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", "🎬 Trailer lookup".bright_blue().bold());
    println!();

    match result {
        Ok(meta) => print_meta(&meta),
        Err(ResolveError::NotFound { external_id }) => {
            println!(
                "{}",
                format!("⚠️  No TMDB match for {}", external_id).yellow()
            );
        }
        Err(ResolveError::Upstream(e)) => {
            println!("{}", format!("❌ TMDB request failed: {}", e).red());
        }
    }
    println!();

    Ok(())
}

fn print_meta(meta: &TrailerMeta) {
    println!("  Id:      {}", meta.id.cyan());
    println!("  Type:    {}", meta.kind.to_string().cyan());
    match &meta.trailer {
        Some(url) => println!("  Trailer: {}", url.bright_green().bold()),
        None => println!("  Trailer: {}", "none".bright_black()),
    }
}

fn print_manifest() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Manifest::trailers())?);
    Ok(())
}

/// Validates configuration and prints a summary without secrets.
fn check_config() -> Result<()> {
    println!("{}", "🔧 Configuration check".bright_blue().bold());
    println!();

    let config: Config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", format!("❌ Invalid configuration: {:#}", e).red().bold());
            return Err(e);
        }
    };

    println!("  Listen:    {}", config.listen_addr.cyan());
    println!("  TMDB:      {}", config.tmdb_base_url.cyan());
    println!(
        "  Cache:     {}",
        if config.cache_enabled {
            format!("memory, TTL {}s", config.cache_ttl_seconds).green()
        } else {
            "disabled".yellow()
        }
    );
    println!(
        "  Timeout:   {}",
        config
            .upstream_timeout_seconds
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string())
            .bright_black()
    );
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
    println!();

    Ok(())
}
