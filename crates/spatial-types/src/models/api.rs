//! Wire types for the spatial image upload API

use serde::{Deserialize, Serialize};

/// Default base URL of the upload service
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Path of the upload endpoint, relative to the API base
pub const CREATE_IMAGE_PATH: &str = "/api/create-spatial-image";

/// Multipart field name carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Successful response from `POST /api/create-spatial-image`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateImageResponse {
    pub message: String,
    /// Name of the file as the client sent it
    #[serde(alias = "filename")]
    pub original_filename: String,
    /// URL of the processed image, absolute or relative to the API base
    pub processed_image_url: String,
}

/// Body of any non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Message to show for a failed upload
///
/// Prefers the server's `error` field, falling back to a generic message
/// carrying the HTTP status.
pub fn error_message(status: u16, body: Option<ApiErrorBody>) -> String {
    match body {
        Some(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("Upload failed (HTTP {})", status),
    }
}

/// Resolve a processed image URL returned by the service against the API base
pub fn resolve_image_url(api_base: &str, url: &str) -> String {
    let is_absolute = ["http://", "https://", "data:", "blob:"]
        .iter()
        .any(|scheme| url.starts_with(scheme));
    if is_absolute {
        return url.to_string();
    }

    let base = api_base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        format!("{}/{}", base, url)
    }
}
