//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://linkboard.db?mode=rwc"
//! export LISTEN="127.0.0.1:8080"
//! export BASE_URL="https://sho.rt/"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://linkboard.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base used to build short URLs (default: request `Host`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6, range: 4-32)
//! - `MAX_URL_LENGTH` - Longest accepted original URL (default: 500)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://linkboard.db?mode=rwc";
pub const DEFAULT_MAX_URL_LENGTH: usize = 500;

const MIN_ALIAS_LENGTH: usize = 4;
const MAX_GENERATED_ALIAS_LENGTH: usize = 32;
const URL_LENGTH_CEILING: usize = 8192;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base URL prepended to aliases. Falls back to the request host.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub alias_length: usize,
    pub max_url_length: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

/// The subset of [`Config`] the shortener needs at request time.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    pub alias_length: usize,
    pub max_url_length: usize,
    pub base_url: Option<String>,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_url_length: DEFAULT_MAX_URL_LENGTH,
            base_url: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            alias_length: parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?,
            max_url_length: parse_var("MAX_URL_LENGTH", DEFAULT_MAX_URL_LENGTH)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", 30)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - `base_url` is not an absolute http(s) URL
    /// - alias length, URL length or pool settings are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if let Some(ref base_url) = self.base_url {
            let parsed = url::Url::parse(base_url)
                .with_context(|| format!("BASE_URL is not a valid URL: '{}'", base_url))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!("BASE_URL must use http or https, got '{}'", base_url);
            }
        }

        if !(MIN_ALIAS_LENGTH..=MAX_GENERATED_ALIAS_LENGTH).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between {} and {}, got {}",
                MIN_ALIAS_LENGTH,
                MAX_GENERATED_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.max_url_length == 0 || self.max_url_length > URL_LENGTH_CEILING {
            anyhow::bail!(
                "MAX_URL_LENGTH must be between 1 and {}, got {}",
                URL_LENGTH_CEILING,
                self.max_url_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Settings handed to the shortener service and page handlers.
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            alias_length: self.alias_length,
            max_url_length: self.max_url_length,
            base_url: self.base_url.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Base URL: {}",
            self.base_url.as_deref().unwrap_or("(from request host)")
        );
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Max URL length: {}", self.max_url_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads `name` and parses it, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
