//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tally_shared::AppError;
use tracing::{error, warn};

/// Wraps [`AppError`] so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server errors are logged in full and answered with a generic message
        let message = if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
            "An error occurred".to_string()
        } else {
            warn!(error = %self.0, "Request rejected");
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": message
            })),
        )
            .into_response()
    }
}
