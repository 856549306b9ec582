//! Configuration management for the Bazaar Management Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BAZAAR_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream store API configuration
    pub upstream: UpstreamConfig,

    /// Reporting pipeline configuration
    pub reporting: ReportingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the store API, without a trailing slash
    pub base_url: String,

    /// API token sent as `Authorization: Token <token>`.
    /// Set via BAZAAR_UPSTREAM__TOKEN; never committed to config files.
    pub token: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportingConfig {
    /// Operating expenses estimated as a fraction of revenue
    pub expense_rate: Decimal,

    /// Effective stock at or below this count flags a product as low
    pub low_stock_threshold: i64,

    /// Number of products kept in the profitability ranking
    pub top_products: usize,

    /// Number of monthly buckets kept in the trend report
    pub trend_months: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("BAZAAR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", "http://localhost:8000/store")?
            .set_default("upstream.token", "")?
            .set_default("upstream.timeout_secs", 30)?
            .set_default("reporting.expense_rate", "0.10")?
            .set_default("reporting.low_stock_threshold", 20)?
            .set_default("reporting.top_products", 10)?
            .set_default("reporting.trend_months", 4)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BAZAAR_ prefix)
            .add_source(
                Environment::with_prefix("BAZAAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            expense_rate: Decimal::new(10, 2),
            low_stock_threshold: 20,
            top_products: 10,
            trend_months: 4,
        }
    }
}
