//! Port traits (interfaces) for dependency injection

pub mod storage;

pub use storage::{PointStore, PolygonStore, SchemaStore, SpatialStore};
