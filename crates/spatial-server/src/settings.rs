//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `spatial.toml` in the working directory, then `SPATIAL_*` environment
//! variables (`SPATIAL_DATABASE_URL`, `SPATIAL_BIND_ADDRESS`, ...).

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "SPATIAL";
pub const CONFIG_FILE_NAME: &str = "spatial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub storage: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub request_timeout_secs: u64,
    pub log_json: bool,
}

impl ServerConfig {
    /// Load from `spatial.toml` (if present) and the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with(env: Environment) -> Result<Self> {
        let config = Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("storage", "sqlite")?
            .set_default("database_url", "sqlite://spatial_db.sqlite")?
            .set_default("max_connections", 5)?
            .set_default("request_timeout_secs", 30)?
            .set_default("log_json", false)?
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration sources")?;

        let config: ServerConfig = config
            .try_deserialize()
            .context("Failed to parse configuration")?;

        if config.max_connections == 0 {
            anyhow::bail!("max_connections must be at least 1");
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
