//! HTML pages.

use std::convert::Infallible;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use futures::StreamExt;

use crate::{AppState, error::ApiError, suspense};

/// Creates the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/dashboard", get(dashboard_page))
}

async fn root() -> Redirect {
    Redirect::temporary("/dashboard")
}

/// GET /dashboard
///
/// Streams the shell immediately, then one patch per section as its data
/// arrives.
async fn dashboard_page(State(state): State<AppState>) -> Result<Response, ApiError> {
    let chunks = suspense::dashboard_stream(state.source)?;
    let body = Body::from_stream(chunks.map(Ok::<_, Infallible>));

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response())
}
