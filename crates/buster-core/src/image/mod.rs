//! Document image payloads.
//!
//! Converts the wire form sent by the capture/upload UI into decoded image
//! bytes ready for the external model.

pub mod data_url;
pub mod mime;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{BusterError, BusterResult};

/// Request body of `POST /api/analyze`.
///
/// Both fields are optional on the wire so their absence can be reported
/// as a client error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// A decoded document image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(image_data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            image_data: Some(image_data.into()),
            mime_type: Some(mime_type.into()),
        }
    }

    /// True when either field is absent or empty.
    pub fn is_incomplete(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.image_data) || blank(&self.mime_type)
    }

    /// Validate the payload and decode its base64 body.
    ///
    /// A data-URL prefix on `image_data` is stripped first.
    pub fn decode(&self) -> BusterResult<DocumentImage> {
        if self.is_incomplete() {
            return Err(BusterError::MissingInput);
        }
        let (Some(data), Some(mime_type)) = (&self.image_data, &self.mime_type) else {
            return Err(BusterError::MissingInput);
        };

        // Line-wrapped (MIME style) base64 is accepted.
        let base64_data: String = data_url::strip_prefix(data)
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&base64_data)
            .map_err(|e| BusterError::invalid_image(format!("imageData is not valid base64: {}", e)))?;

        if bytes.is_empty() {
            return Err(BusterError::MissingInput);
        }

        Ok(DocumentImage {
            mime_type: mime_type.trim().to_string(),
            bytes,
        })
    }
}

impl DocumentImage {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Base64 encoding of the image bytes.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}
