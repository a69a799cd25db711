//! Application configuration management.

pub use config::ConfigError;
use serde::Deserialize;

use crate::error::AppError;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Dashboard page configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Dashboard page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of invoices shown in the latest invoices panel.
    #[serde(default = "default_latest_invoices_limit")]
    pub latest_invoices_limit: u64,
    /// Currency that stored amounts are denominated in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            latest_invoices_limit: default_latest_invoices_limit(),
            currency: default_currency(),
        }
    }
}

fn default_latest_invoices_limit() -> u64 {
    5
}

fn default_currency() -> Currency {
    Currency::Usd
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Checks values that deserialize fine but make no sense at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dashboard.latest_invoices_limit == 0 {
            return Err(AppError::Validation(
                "dashboard.latest_invoices_limit must be at least 1".to_string(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::Validation(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        Ok(())
    }
}
