//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export TMDB_API_KEY="your-tmdb-v3-key"
//! export PORT=7000
//! ```
//!
//! ## Required Variables
//!
//! - `TMDB_API_KEY` - TMDB v3 API key
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `7000`)
//! - `LISTEN` - Full bind address, overrides `PORT` (default: `0.0.0.0:{PORT}`)
//! - `TMDB_BASE_URL` - TMDB API root (default: `https://api.themoviedb.org/3`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_ENABLED` - `false` disables the trailer cache (default: `true`)
//! - `CACHE_TTL_SECONDS` - Trailer cache TTL (default: 21600, i.e. 6 hours)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Per-request TMDB timeout (default: none)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::tmdb::TMDB_BASE_URL;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 7000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB v3 API key (`TMDB_API_KEY`). Must be non-empty.
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, a no-op cache is used and every lookup reaches TMDB.
    pub cache_enabled: bool,
    /// TTL (seconds) for cached trailer metadata.
    pub cache_ttl_seconds: u64,
    /// Timeout for each TMDB request. `None` leaves requests unbounded.
    pub upstream_timeout_seconds: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TMDB_API_KEY` is missing or `PORT` is not a number.
    pub fn from_env() -> Result<Self> {
        let tmdb_api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY must be set")?;

        let tmdb_base_url =
            env::var("TMDB_BASE_URL").unwrap_or_else(|_| TMDB_BASE_URL.to_string());

        let listen_addr = Self::load_listen_addr().context("Failed to load listen address")?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6 * 60 * 60);

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            tmdb_api_key,
            tmdb_base_url,
            listen_addr,
            log_level,
            log_format,
            cache_enabled,
            cache_ttl_seconds,
            upstream_timeout_seconds,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`, with `PORT` defaulting to 7000
    fn load_listen_addr() -> Result<String> {
        if let Ok(addr) = env::var("LISTEN") {
            return Ok(addr);
        }

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{}", port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tmdb_api_key` is empty
    /// - `tmdb_base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `cache_ttl_seconds` or `upstream_timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.tmdb_api_key.trim().is_empty() {
            anyhow::bail!("TMDB_API_KEY must not be empty");
        }

        let base_url = url::Url::parse(&self.tmdb_base_url)
            .with_context(|| format!("TMDB_BASE_URL is not a valid URL: '{}'", self.tmdb_base_url))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "TMDB_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.tmdb_base_url
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.upstream_timeout_seconds == Some(0) {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0 when set");
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_seconds.map(Duration::from_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  TMDB: {}", self.tmdb_base_url);
        tracing::info!("  TMDB API key: {}", mask_secret(&self.tmdb_api_key));

        if self.cache_enabled {
            tracing::info!("  Cache: memory (TTL: {}s)", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Cache: disabled");
        }

        match self.upstream_timeout_seconds {
            Some(secs) => tracing::info!("  Upstream timeout: {}s", secs),
            None => tracing::info!("  Upstream timeout: none"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
