//! HTTP layer with Axum routes and Askama templates.
//!
//! This crate provides:
//! - The streamed `/dashboard` page
//! - JSON API routes under `/api/v1`
//! - Error responses

pub mod error;
pub mod render;
pub mod routes;
pub mod suspense;

use std::sync::Arc;

use axum::Router;
use tally_core::dashboard::DashboardSource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where dashboard data comes from.
    pub source: Arc<dyn DashboardSource>,
}

impl AppState {
    /// Creates state backed by the given source.
    pub fn new(source: impl DashboardSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let api = routes::api_routes().layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    Router::new()
        .merge(routes::page_routes())
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
