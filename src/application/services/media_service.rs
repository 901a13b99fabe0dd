//! Media Service
//!
//! Image uploads for slides and catalog entries. Files are checked locally
//! (type and size) before anything is sent, and every URL handed back is
//! absolute against the backend origin.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{
    mime_from_extension, DeleteImageResponse, ImageInfo, UploadedImage, ALLOWED_IMAGE_TYPES,
    MAX_UPLOAD_SIZE,
};
use crate::infrastructure::http::ApiClient;
use crate::shared::error::AppError;
use crate::shared::media::full_image_url;

pub const INVALID_TYPE_MESSAGE: &str =
    "Tipo de archivo no válido. Solo se permiten JPG, PNG y WebP.";

pub const TOO_LARGE_MESSAGE: &str = "El archivo es demasiado grande. Tamaño máximo: 5MB.";

pub const UPLOAD_FAILED_MESSAGE: &str = "Error al subir la imagen";

/// An image ready to be sent.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its type from the extension.
    pub async fn read(path: &Path) -> Result<Self, AppError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::Validation(format!("Invalid file path: {}", path.display())))?
            .to_string();

        let mime = mime_from_extension(&filename)
            .ok_or_else(|| AppError::Validation(INVALID_TYPE_MESSAGE.to_string()))?;

        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(filename, mime, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Type and size check run before upload.
    pub fn check(&self) -> Result<(), AppError> {
        validate_image(&self.mime, self.size())
    }
}

pub fn validate_image(mime: &str, size: u64) -> Result<(), AppError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(AppError::Validation(INVALID_TYPE_MESSAGE.to_string()));
    }
    if size > MAX_UPLOAD_SIZE {
        return Err(AppError::Validation(TOO_LARGE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Inline upload status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub uploading: bool,
    pub error: Option<String>,
    /// Absolute URL of the last successful upload
    pub last_url: Option<String>,
}

pub struct MediaService {
    client: Arc<ApiClient>,
    state: RwLock<UploadState>,
}

impl MediaService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(UploadState::default()),
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.read().clone()
    }

    /// Validate and upload. The returned `url` is absolute.
    pub async fn upload(&self, file: ImageFile) -> Result<UploadedImage, AppError> {
        if let Err(e) = file.check() {
            self.state.write().error = Some(e.user_message());
            return Err(e);
        }

        {
            let mut state = self.state.write();
            state.uploading = true;
            state.error = None;
        }

        let size = file.size();
        let result = self
            .client
            .upload_image(&file.filename, &file.mime, file.bytes)
            .await;

        let mut state = self.state.write();
        state.uploading = false;
        match result {
            Ok(mut uploaded) => {
                uploaded.url = full_image_url(self.client.origin(), &uploaded.url);
                tracing::info!(filename = %uploaded.filename, size, "Image uploaded");
                state.last_url = Some(uploaded.url.clone());
                Ok(uploaded)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Image upload failed");
                state.error = Some(e.message_or(UPLOAD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    pub async fn upload_path(&self, path: &Path) -> Result<UploadedImage, AppError> {
        let file = ImageFile::read(path).await?;
        self.upload(file).await
    }

    /// Uploaded images, newest first, with absolute URLs.
    pub async fn list_images(&self) -> Result<Vec<ImageInfo>, AppError> {
        let origin = self.client.origin();
        let mut images: Vec<ImageInfo> = self
            .client
            .list_images()
            .await?
            .into_iter()
            .map(|mut image| {
                image.url = full_image_url(origin, &image.url);
                image
            })
            .collect();

        images.sort_by(|a, b| b.created.total_cmp(&a.created));
        Ok(images)
    }

    pub async fn delete_image(&self, filename: &str) -> Result<DeleteImageResponse, AppError> {
        let response = self.client.delete_image(filename).await?;
        tracing::info!(filename, "Image deleted");
        Ok(response)
    }
}
