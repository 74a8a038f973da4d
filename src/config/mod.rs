use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration, built once at process start and
/// passed by reference into each component's constructor.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub billet_api: BilletApiConfig,
    pub cutoff: CutoffConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// External billing provider endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BilletApiConfig {
    pub base_url: String,
}

/// Offsets applied to "today" when bounding the due-installment query
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CutoffConfig {
    pub months: u32,
    pub days: u32,
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
            billet_api: BilletApiConfig {
                base_url: env::var("BILLET_API_BASE_URL")
                    .map_err(|_| AppError::Configuration("BILLET_API_BASE_URL not set".to_string()))?,
            },
            cutoff: CutoffConfig {
                months: env::var("INSTALLMENTS_MONTHS")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid INSTALLMENTS_MONTHS".to_string())
                    })?,
                days: env::var("INSTALLMENTS_DAYS")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid INSTALLMENTS_DAYS".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.billet_api.base_url.is_empty() {
            return Err(AppError::Configuration(
                "Billet API base URL must not be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
