//! In-memory store using DashMap
//!
//! Drop-in replacement for the SQLite backend, selected with
//! `storage = "memory"`. Nothing survives a restart.

use async_trait::async_trait;
use dashmap::DashMap;
use spatial_core::{
    NewPoint, NewPolygon, Point, PointStore, Polygon, PolygonStore, RecordKind, Result,
    SchemaStore, SpatialError,
};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct MemoryStore {
    points: DashMap<i64, Point>,
    polygons: DashMap<i64, Polygon>,
    next_point_id: AtomicI64,
    next_polygon_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            points: DashMap::new(),
            polygons: DashMap::new(),
            next_point_id: AtomicI64::new(1),
            next_polygon_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaStore for MemoryStore {
    async fn initialize(&self) -> Result<()> {
        tracing::info!("In-memory store ready");
        Ok(())
    }
}

#[async_trait]
impl PointStore for MemoryStore {
    async fn insert_point(&self, point: &NewPoint) -> Result<i64> {
        let id = self.next_point_id.fetch_add(1, Ordering::SeqCst);
        self.points.insert(id, point.clone().with_id(id));
        Ok(id)
    }

    async fn find_point(&self, id: i64) -> Result<Option<Point>> {
        Ok(self.points.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_point(&self, point: &Point) -> Result<()> {
        match self.points.get_mut(&point.id) {
            Some(mut entry) => {
                *entry = point.clone();
                Ok(())
            }
            None => Err(SpatialError::not_found(RecordKind::Point, point.id)),
        }
    }
}

#[async_trait]
impl PolygonStore for MemoryStore {
    async fn insert_polygon(&self, polygon: &NewPolygon) -> Result<i64> {
        let id = self.next_polygon_id.fetch_add(1, Ordering::SeqCst);
        self.polygons.insert(id, polygon.clone().with_id(id));
        Ok(id)
    }

    async fn find_polygon(&self, id: i64) -> Result<Option<Polygon>> {
        Ok(self.polygons.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_polygon(&self, polygon: &Polygon) -> Result<()> {
        match self.polygons.get_mut(&polygon.id) {
            Some(mut entry) => {
                *entry = polygon.clone();
                Ok(())
            }
            None => Err(SpatialError::not_found(RecordKind::Polygon, polygon.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_basic_operations() {
        let store = MemoryStore::new();
        assert_ok!(store.initialize().await);

        let id = store
            .insert_point(&NewPoint {
                name: "A".to_string(),
                latitude: 1.0,
                longitude: 2.0,
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let point = store.find_point(id).await.unwrap().unwrap();
        assert_eq!(point.name, "A");

        // Test non-existent id
        assert_eq!(store.find_point(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_independent_per_kind() {
        let store = MemoryStore::new();

        let point_id = store
            .insert_point(&NewPoint {
                name: "A".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .unwrap();
        let polygon_id = store
            .insert_polygon(&NewPolygon {
                name: "P".to_string(),
                coordinates: "[]".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(point_id, 1);
        assert_eq!(polygon_id, 1);
    }

    #[tokio::test]
    async fn test_update_requires_existing_record() {
        let store = MemoryStore::new();

        assert_err!(
            store
                .update_polygon(&Polygon {
                    id: 7,
                    name: "P".to_string(),
                    coordinates: "[]".to_string(),
                })
                .await
        );
        assert_eq!(store.find_polygon(7).await.unwrap(), None);

        let id = store
            .insert_polygon(&NewPolygon {
                name: "P".to_string(),
                coordinates: "[]".to_string(),
            })
            .await
            .unwrap();
        let replacement = Polygon {
            id,
            name: "Q".to_string(),
            coordinates: "not json".to_string(),
        };
        assert_ok!(store.update_polygon(&replacement).await);
        assert_eq!(store.find_polygon(id).await.unwrap(), Some(replacement));
    }
}
