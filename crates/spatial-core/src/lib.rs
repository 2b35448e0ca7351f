//! Spatial Core Library
//!
//! Domain types, validation, and storage traits for the spatial records service.

// Re-export pure types from spatial-types
pub use spatial_types::*;

pub mod error;
pub mod ports;
pub mod validation;

pub use error::{Result, SpatialError};
pub use ports::{PointStore, PolygonStore, SchemaStore, SpatialStore};
pub use validation::Validate;
