//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured (loaded via `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `DB_PATH` - SQLite file location (default: `./data/database.db`);
//!   the containing directory is created if absent
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `LISTEN` - Bind address (default: `0.0.0.0:9090`)
//! - `BASE_URL` - Public base for short links (default: request `Host` header)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_STRATEGY` - `sequential` or `random` (default: `sequential`)
//! - `CODE_SEED_BASE` - First counter value (default: 100000)
//! - `CODE_SEED_STRIDE` - Counter stride (default: 50000)
//! - `CODE_MAX_ATTEMPTS` - Allocation retry bound (default: 10)
//! - `CODE_RANDOM_LENGTH` - Length of random codes (default: 7)
//! - `STATIC_DIR` - Stylesheet and script directory (default: `static`)
//! - `IMAGES_DIR` - Images and favicon directory (default: `images`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::services::code_allocator::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::{
    CodeGenerator, DEFAULT_RANDOM_LENGTH, DEFAULT_SEED_BASE, DEFAULT_SEED_STRIDE,
    RandomGenerator, SequentialGenerator,
};

/// Default SQLite file location.
pub const DEFAULT_DB_PATH: &str = "./data/database.db";

/// How candidate short codes are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStrategy {
    /// Base-62 encoding of an in-memory counter.
    Sequential,
    /// Fixed-length random draw from the base-62 alphabet.
    Random,
}

impl FromStr for CodeStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "random" => Ok(Self::Random),
            other => anyhow::bail!(
                "CODE_STRATEGY must be 'sequential' or 'random', got '{}'",
                other
            ),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub db_max_connections: u32,
    pub listen_addr: String,
    /// Public base for short links. When `None`, the request `Host` header is used.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub code_strategy: CodeStrategy,
    pub code_seed_base: u64,
    pub code_seed_stride: u64,
    pub code_max_attempts: usize,
    pub code_random_length: usize,
    pub static_dir: String,
    pub images_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            db_max_connections: 5,
            listen_addr: "0.0.0.0:9090".to_string(),
            base_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_strategy: CodeStrategy::Sequential,
            code_seed_base: DEFAULT_SEED_BASE,
            code_seed_stride: DEFAULT_SEED_STRIDE,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
            code_random_length: DEFAULT_RANDOM_LENGTH,
            static_dir: "static".to_string(),
            images_dir: "images".to_string(),
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
    /// Returns an error if a numeric variable or `CODE_STRATEGY` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let db_path = env::var("DB_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.db_path);

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let code_strategy = match env::var("CODE_STRATEGY") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.code_strategy,
        };

        Ok(Self {
            db_path,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url,
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            code_strategy,
            code_seed_base: parse_var("CODE_SEED_BASE", defaults.code_seed_base)?,
            code_seed_stride: parse_var("CODE_SEED_STRIDE", defaults.code_seed_stride)?,
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS", defaults.code_max_attempts)?,
            code_random_length: parse_var("CODE_RANDOM_LENGTH", defaults.code_random_length)?,
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            images_dir: env::var("IMAGES_DIR").unwrap_or(defaults.images_dir),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `db_max_connections` is zero
    /// - `code_seed_stride` is zero
    /// - `code_max_attempts` is outside 1..=100
    /// - `code_random_length` is outside 4..=16
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

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.code_seed_stride == 0 {
            anyhow::bail!("CODE_SEED_STRIDE must be greater than 0");
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if !(4..=16).contains(&self.code_random_length) {
            anyhow::bail!(
                "CODE_RANDOM_LENGTH must be between 4 and 16, got {}",
                self.code_random_length
            );
        }

        Ok(())
    }

    /// Builds the candidate generator selected by `code_strategy`.
    pub fn code_generator(&self) -> Arc<dyn CodeGenerator> {
        match self.code_strategy {
            CodeStrategy::Sequential => Arc::new(SequentialGenerator::new(
                self.code_seed_base,
                self.code_seed_stride,
            )),
            CodeStrategy::Random => Arc::new(RandomGenerator::new(self.code_random_length)),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.db_path);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        match self.code_strategy {
            CodeStrategy::Sequential => tracing::info!(
                "  Code strategy: sequential (base {}, stride {})",
                self.code_seed_base,
                self.code_seed_stride
            ),
            CodeStrategy::Random => tracing::info!(
                "  Code strategy: random (length {})",
                self.code_random_length
            ),
        }
        tracing::info!("  Max allocation attempts: {}", self.code_max_attempts);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", name, v)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
