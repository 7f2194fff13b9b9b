//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development. Every variable has a default, so the
//! application starts with no environment at all.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// The admin credential pair the auth gate checks against.
///
/// Held in configuration rather than hard-coded at the comparison site, so
/// tests can supply an alternate pair without touching global state.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub storage_path: PathBuf,
    pub admin: AdminCredentials,
    pub log_level: Level,
    /// Cosmetic pause before a login attempt completes.
    pub login_delay: Duration,
    /// Cosmetic pause before a registration attempt completes.
    pub register_delay: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let storage_path = std::env::var("STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./terminy.json"));

        let admin = AdminCredentials {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let login_delay = Duration::from_millis(parse_millis("LOGIN_DELAY_MS", 800)?);
        let register_delay = Duration::from_millis(parse_millis("REGISTER_DELAY_MS", 1000)?);

        Ok(Self {
            storage_path,
            admin,
            log_level,
            login_delay,
            register_delay,
        })
    }
}

/// Reads an optional millisecond duration from the environment.
fn parse_millis(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(
                var.to_string(),
                format!("'{}' is not a number of milliseconds", raw),
            )
        }),
    }
}
