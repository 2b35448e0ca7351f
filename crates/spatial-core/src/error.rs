//! Error types for the spatial records service

use spatial_types::RecordKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpatialError>;

#[derive(Error, Debug)]
pub enum SpatialError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: i64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl SpatialError {
    pub fn not_found(kind: RecordKind, id: i64) -> Self {
        SpatialError::NotFound { kind, id }
    }
}
