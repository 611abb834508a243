use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Sold out: {0}")]
    SoldOut(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Storage temporarily unavailable: {0}")]
    Transient(String),
    #[error("Internal server error")]
    Internal,
}

// SQLITE_BUSY / SQLITE_LOCKED primary and extended result codes. A busy
// writer means the whole transaction was rolled back, so the request is
// safe to retry as-is.
const SQLITE_BUSY_CODES: [&str; 5] = ["5", "6", "261", "262", "517"];

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) {
                    return (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(json!({ "error": "Storage temporarily unavailable, retry the request" }))
                    ).into_response();
                }

                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();
                    if SQLITE_BUSY_CODES.contains(&code.as_ref()) {
                        return (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(json!({ "error": "Storage temporarily unavailable, retry the request" }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::SoldOut(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Transient(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
