//! API module
//!
//! HTTP API endpoints, response formatting and middleware.

pub mod middleware;
pub mod routes;
pub mod serializer;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};

use crate::store::UserStore;

pub use routes::{create_router, AppState};
pub use serializer::UserResponse;

/// Build the full application router around a store.
///
/// Layers run outermost first: context -> logging -> handler.
pub fn build_app(store: Arc<dyn UserStore>) -> Router {
    let api_router = create_router()
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check (no context needed)
        .route("/health", get(health_check))
        .nest("/api/v1", api_router)
        .with_state(AppState::new(store))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
