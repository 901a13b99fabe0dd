//! Uploaded image entities.
//!
//! Images are stored by the backend; the client only checks type and size
//! before sending them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum upload size (5 MiB)
pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types accepted for upload.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Response of `POST /uploads/upload-image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub success: bool,
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub size: u64,
}

/// One entry of `GET /uploads/images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub size: u64,
    /// Unix timestamp (seconds) as reported by the backend
    #[serde(default)]
    pub created: f64,
}

impl ImageInfo {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created.trunc() as i64, 0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<ImageInfo>,
}

/// Response of `DELETE /uploads/images/:filename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteImageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Guess an image MIME type from a file extension.
pub fn mime_from_extension(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
