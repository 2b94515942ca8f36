use crate::core::{AppError, Result};
use std::env;

pub mod server;
pub mod tariff;

pub use server::ServerConfig;
pub use tariff::TariffConfig;

use crate::modules::bills::services::{DEFAULT_DUE_DAYS, MAX_DUE_DAYS};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub tariff: TariffConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub bill_due_days: u32,
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
                bill_due_days: env::var("BILL_DUE_DAYS")
                    .unwrap_or_else(|_| DEFAULT_DUE_DAYS.to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid BILL_DUE_DAYS".to_string()))?,
            },
            server: ServerConfig::from_env()?,
            tariff: TariffConfig::from_env(),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.bill_due_days == 0 {
            return Err(AppError::Configuration(
                "Bill due days must be greater than 0".to_string(),
            ));
        }

        if self.app.bill_due_days > MAX_DUE_DAYS {
            return Err(AppError::Configuration(format!(
                "Bill due days cannot exceed {}",
                MAX_DUE_DAYS
            )));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
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
