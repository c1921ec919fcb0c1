//! Linden storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};

use state::AppState;

/// Build the full application router, including health checks, static
/// assets, and the session layer.
pub fn build_router(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .route_service(
            "/placeholder.jpg",
            ServeFile::new("crates/storefront/static/placeholder.jpg"),
        )
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
