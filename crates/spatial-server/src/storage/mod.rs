//! Storage layer
//!
//! Uses SQLite (embedded) by default. `MemoryStore` (DashMap) is available for
//! throwaway deployments and tests.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;

use crate::settings::{ServerConfig, StorageBackend};
use anyhow::Result;
use spatial_core::SpatialStore;
use std::sync::Arc;

/// Open the backend selected by configuration
pub async fn open(config: &ServerConfig) -> Result<Arc<dyn SpatialStore>> {
    match config.storage {
        StorageBackend::Sqlite => {
            let db = Database::connect(&config.database_url, config.max_connections).await?;
            Ok(Arc::new(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
