//! Lazy schema initialization
//!
//! The first request of any kind creates the tables. Concurrent first
//! requests all wait on the same initialization, and a failed attempt is not
//! remembered, so the next request tries again.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use spatial_core::SchemaStore;
use tokio::sync::OnceCell;

#[derive(Default)]
pub struct SchemaGuard {
    ready: OnceCell<()>,
}

impl SchemaGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }

    /// Run `store.initialize()` unless it already succeeded in this process
    pub async fn ensure<S>(&self, store: &S) -> spatial_core::Result<()>
    where
        S: SchemaStore + ?Sized,
    {
        if self.is_ready() {
            return Ok(());
        }

        self.ready
            .get_or_try_init(|| async {
                tracing::info!("First request received, creating tables");
                store.initialize().await
            })
            .await
            .map(|_| ())
    }
}

/// Middleware applied to every route
pub async fn ensure_schema(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state
        .schema
        .ensure(state.store.as_ref())
        .await
        .map_err(|e| ApiError::Internal(format!("Schema initialization failed: {}", e)))?;

    Ok(next.run(request).await)
}
