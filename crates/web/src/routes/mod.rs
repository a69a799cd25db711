//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod dashboard;
pub mod health;
pub mod pages;

/// Creates the HTML page routes.
pub fn page_routes() -> Router<AppState> {
    pages::routes()
}

/// Creates the JSON API router, nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
}
