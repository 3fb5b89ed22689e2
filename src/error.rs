//! Error handling
//!
//! The only user-facing failure in this service is export I/O: filter
//! parameters are coerced rather than rejected, and empty results are
//! valid responses. An export failure surfaces as `{success: false}`
//! and never takes the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// CSV export could not be written (unwritable destination, disk
    /// full, ...)
    ExportFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ExportFailed(msg) => {
                tracing::error!("Export failed: {}", msg);
                let body = Json(json!({
                    "success": false,
                    "filename": null,
                    "records": 0,
                    "message": "Export failed"
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ExportFailed(err.to_string())
    }
}
