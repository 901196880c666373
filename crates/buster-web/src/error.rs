//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use buster_core::error::ErrorClass;
use buster_core::BusterError;
use serde_json::json;
use tracing::{error, warn};

/// An error rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<BusterError> for ApiError {
    fn from(err: BusterError) -> Self {
        match err.status_class() {
            ErrorClass::Client => Self::bad_request(err.to_string()),
            ErrorClass::Server => Self::internal(err.to_string()),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        BusterError::Template(err.to_string()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "Request rejected");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
