use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// Tuning for the summary aggregation
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Number of document fetches in flight per window (1 = sequential)
    pub fetch_concurrency: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            fetch_concurrency: 1,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            summary: SummaryConfig {
                fetch_concurrency: env::var("SUMMARY_FETCH_CONCURRENCY")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SUMMARY_FETCH_CONCURRENCY".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.summary.fetch_concurrency == 0 {
            return Err(AppError::Configuration(
                "Summary fetch concurrency must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "Database pool size cannot exceed max connections".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
