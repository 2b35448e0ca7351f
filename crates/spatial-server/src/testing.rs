//! Shared helpers for router tests

use crate::routes::router;
use crate::storage::{Database, MemoryStore};
use crate::AppState;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use spatial_core::{
    NewPoint, NewPolygon, Point, PointStore, Polygon, PolygonStore, Result, SchemaStore,
    SpatialError, SpatialStore,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt as _; // for `oneshot`

/// Router over a fresh in-memory SQLite database. Tables are not created
/// until the first request goes through the router.
pub async fn sqlite_app() -> (Router, AppState) {
    let db = Database::connect("sqlite::memory:", 1).await.unwrap();
    let state = AppState::new(Arc::new(db));
    (router(state.clone(), Duration::from_secs(5)), state)
}

pub fn memory_app() -> (Router, AppState) {
    app_with(Arc::new(MemoryStore::new()), Duration::from_secs(5))
}

/// Router over any store, with a custom request timeout
pub fn app_with(store: Arc<dyn SpatialStore>, timeout: Duration) -> (Router, AppState) {
    let state = AppState::new(store);
    (router(state.clone(), timeout), state)
}

/// `MemoryStore` that can fail point inserts and slow down point lookups
#[derive(Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    failing_inserts: AtomicUsize,
    lookup_delay: Option<Duration>,
}

impl FaultyStore {
    /// The next `count` point inserts fail with a database error
    pub fn failing_inserts(count: usize) -> Self {
        Self {
            failing_inserts: AtomicUsize::new(count),
            ..Self::default()
        }
    }

    pub fn slow_lookups(delay: Duration) -> Self {
        Self {
            lookup_delay: Some(delay),
            ..Self::default()
        }
    }
}

#[async_trait]
impl SchemaStore for FaultyStore {
    async fn initialize(&self) -> Result<()> {
        self.inner.initialize().await
    }
}

#[async_trait]
impl PointStore for FaultyStore {
    async fn insert_point(&self, point: &NewPoint) -> Result<i64> {
        let fail = self
            .failing_inserts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(SpatialError::Database("disk I/O error".to_string()));
        }
        self.inner.insert_point(point).await
    }

    async fn find_point(&self, id: i64) -> Result<Option<Point>> {
        if let Some(delay) = self.lookup_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.find_point(id).await
    }

    async fn update_point(&self, point: &Point) -> Result<()> {
        self.inner.update_point(point).await
    }
}

#[async_trait]
impl PolygonStore for FaultyStore {
    async fn insert_polygon(&self, polygon: &NewPolygon) -> Result<i64> {
        self.inner.insert_polygon(polygon).await
    }

    async fn find_polygon(&self, id: i64) -> Result<Option<Polygon>> {
        self.inner.find_polygon(id).await
    }

    async fn update_polygon(&self, polygon: &Polygon) -> Result<()> {
        self.inner.update_polygon(polygon).await
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
