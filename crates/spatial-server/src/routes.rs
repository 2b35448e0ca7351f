//! Router assembly

use crate::error::{self, ApiError};
use crate::{handlers, schema, AppState};
use axum::{
    error_handling::HandleErrorLayer,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Points
        .route(
            "/point",
            post(handlers::points::create).put(handlers::points::update),
        )
        .route("/point/:id", get(handlers::points::get))
        // Polygons
        .route(
            "/polygon",
            post(handlers::polygons::create).put(handlers::polygons::update),
        )
        .route("/polygon/:id", get(handlers::polygons::get))
        .fallback(error::not_found)
        // Layers
        .layer(middleware::from_fn_with_state(
            state.clone(),
            schema::ensure_schema,
        ))
        .layer(middleware::map_response(error::method_not_allowed))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(error::handle_layer_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
