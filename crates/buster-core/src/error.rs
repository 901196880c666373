//! Centralized error types for Bureaucracy Buster.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum BusterError {
    #[error("Missing imageData or mimeType")]
    MissingInput,

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for analysis operations.
pub type BusterResult<T> = Result<T, BusterError>;

/// Which side of the request/response boundary an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

impl BusterError {
    /// Create an invalid image error.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Create an upstream (external model) error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn status_class(&self) -> ErrorClass {
        match self {
            Self::MissingInput | Self::InvalidImage(_) => ErrorClass::Client,
            _ => ErrorClass::Server,
        }
    }
}
