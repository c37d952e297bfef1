//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (Postgres)
    pub database_url: String,

    /// Secret used to sign session tokens. Never sent to clients.
    pub session_secret: String,

    /// Session lifetime in seconds (default 24 hours)
    pub session_max_age_secs: u64,

    /// Credential-check timeout in milliseconds
    pub auth_timeout_ms: u64,

    /// Whether cookies are marked `Secure` (true outside development)
    pub production: bool,

    /// Runtime configuration
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET is required"))?,

            session_max_age_secs: env::var("SESSION_MAX_AGE_SECS")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .unwrap_or(86400),

            auth_timeout_ms: env::var("AUTH_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            production: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
