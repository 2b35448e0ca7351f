//! Storage traits for persistence
//!
//! Implementations commit every write before returning. A write that fails
//! leaves nothing behind for later reads to observe.

use crate::Result;
use async_trait::async_trait;
use spatial_types::{NewPoint, NewPolygon, Point, Polygon};

/// Schema management
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Create the backing tables if they do not exist. Idempotent.
    async fn initialize(&self) -> Result<()>;
}

/// Point store
#[async_trait]
pub trait PointStore: Send + Sync {
    /// Persist a new point and return its freshly assigned id
    async fn insert_point(&self, point: &NewPoint) -> Result<i64>;
    async fn find_point(&self, id: i64) -> Result<Option<Point>>;
    /// Overwrite name, latitude and longitude of an existing point.
    /// Returns `SpatialError::NotFound` if `point.id` does not exist.
    async fn update_point(&self, point: &Point) -> Result<()>;
}

/// Polygon store
#[async_trait]
pub trait PolygonStore: Send + Sync {
    /// Persist a new polygon and return its freshly assigned id
    async fn insert_polygon(&self, polygon: &NewPolygon) -> Result<i64>;
    async fn find_polygon(&self, id: i64) -> Result<Option<Polygon>>;
    /// Overwrite name and coordinates of an existing polygon.
    /// Returns `SpatialError::NotFound` if `polygon.id` does not exist.
    async fn update_polygon(&self, polygon: &Polygon) -> Result<()>;
}

/// Everything the HTTP layer needs from a backend
pub trait SpatialStore: SchemaStore + PointStore + PolygonStore {}

impl<T> SpatialStore for T where T: SchemaStore + PointStore + PolygonStore {}
