//! Configuration management for LYBSYS server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::room::RoomTypeId;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// One configured room type entry
#[derive(Debug, Deserialize, Clone)]
pub struct RoomEntry {
    pub id: RoomTypeId,
    pub label: String,
    pub nightly_price: i64,
}

/// Room-type catalog. Entry order is preserved into the served catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub rooms: Vec<RoomEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LYBSYS_)
            .add_source(
                Environment::with_prefix("LYBSYS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override server port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rooms: vec![
                RoomEntry {
                    id: RoomTypeId::Standard,
                    label: "Standard Room".to_string(),
                    nightly_price: 100,
                },
                RoomEntry {
                    id: RoomTypeId::Deluxe,
                    label: "Deluxe Room".to_string(),
                    nightly_price: 150,
                },
                RoomEntry {
                    id: RoomTypeId::Suite,
                    label: "Suite".to_string(),
                    nightly_price: 250,
                },
            ],
        }
    }
}
