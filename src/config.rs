//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! `.env` files are honoured through `dotenvy` in `main.rs`.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://shorty.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public origin used to build short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Generated code length (default: 6)
//! - `SHORT_CODE_CHARSET` - Characters codes are drawn from (default: ASCII letters and digits)
//! - `MAX_CODE_ATTEMPTS` - Collision retries before giving up (default: 10)
//! - `FLUSH_INTERVAL_SECONDS` - Visit count write-back period (default: 60)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::code_generator::{CodeAlphabet, DEFAULT_CHARSET};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub short_code_length: usize,
    pub short_code_charset: String,
    /// Upper bound on generate-and-check rounds for a single new link.
    pub max_code_attempts: usize,
    pub flush_interval_seconds: u64,
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://shorty.db?mode=rwc".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            short_code_length: 6,
            short_code_charset: DEFAULT_CHARSET.to_string(),
            max_code_attempts: 10,
            flush_interval_seconds: 60,
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            short_code_length: parse_var("SHORT_CODE_LENGTH", defaults.short_code_length)?,
            short_code_charset: env::var("SHORT_CODE_CHARSET")
                .unwrap_or(defaults.short_code_charset),
            max_code_attempts: parse_var("MAX_CODE_ATTEMPTS", defaults.max_code_attempts)?,
            flush_interval_seconds: parse_var(
                "FLUSH_INTERVAL_SECONDS",
                defaults.flush_interval_seconds,
            )?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the short code length or charset is unusable
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `base_url` is malformed
    /// - `database_url` is not a SQLite URL
    /// - any count or interval is zero
    pub fn validate(&self) -> Result<()> {
        self.code_alphabet()?;

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

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.max_code_attempts == 0 {
            anyhow::bail!("MAX_CODE_ATTEMPTS must be at least 1");
        }

        if self.flush_interval_seconds == 0 {
            anyhow::bail!("FLUSH_INTERVAL_SECONDS must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Builds the code alphabet from the configured length and charset.
    ///
    /// # Errors
    ///
    /// Returns an error if the charset or length is rejected by [`CodeAlphabet::new`].
    pub fn code_alphabet(&self) -> Result<CodeAlphabet> {
        CodeAlphabet::new(&self.short_code_charset, self.short_code_length)
            .context("Invalid SHORT_CODE_LENGTH / SHORT_CODE_CHARSET")
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Short codes: length {}, {} characters",
            self.short_code_length,
            self.short_code_charset.len()
        );
        tracing::info!("  Max code attempts: {}", self.max_code_attempts);
        tracing::info!("  Flush interval: {}s", self.flush_interval_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
