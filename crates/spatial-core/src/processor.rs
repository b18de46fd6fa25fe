//! Image processing seam
//!
//! The service hands every accepted upload to an [`ImageProcessor`]. The
//! bundled [`PassthroughProcessor`] stores the file and returns it as the
//! "processed" image; a model-backed processor replaces it without touching
//! the HTTP layer.

use crate::error::CoreError;
use crate::storage::UploadStore;
use async_trait::async_trait;
use tracing::info;

/// A file received from a client
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload, rejecting an empty filename (whitespace is a valid name)
    pub fn new(
        filename: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(CoreError::EmptyFilename);
        }
        Ok(Self {
            filename,
            content_type,
            bytes,
        })
    }
}

/// Result of processing one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    /// URL the client can fetch the result from
    pub url: String,
    /// Name of the stored result file
    pub stored_name: String,
}

/// Turns an uploaded photo into a spatial image
#[async_trait]
pub trait ImageProcessor: Send + Sync {
    async fn process(&self, upload: Upload) -> Result<ProcessedImage, CoreError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Stores the upload unchanged and serves it back
#[derive(Debug, Clone)]
pub struct PassthroughProcessor {
    store: UploadStore,
    public_prefix: String,
}

impl PassthroughProcessor {
    pub fn new(store: UploadStore, public_prefix: impl Into<String>) -> Self {
        Self {
            store,
            public_prefix: public_prefix.into(),
        }
    }
}

#[async_trait]
impl ImageProcessor for PassthroughProcessor {
    async fn process(&self, upload: Upload) -> Result<ProcessedImage, CoreError> {
        let stored = self.store.save(&upload.filename, &upload.bytes).await?;

        info!(
            original = %upload.filename,
            stored = %stored.stored_name,
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            size = stored.size,
            "Stored upload for passthrough processing"
        );

        let url = format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            stored.stored_name
        );

        Ok(ProcessedImage {
            url,
            stored_name: stored.stored_name,
        })
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_upload_rejects_empty_filename() {
        assert!(matches!(
            Upload::new("", None, vec![1, 2, 3]),
            Err(CoreError::EmptyFilename)
        ));
        assert!(Upload::new("a.png", None, Vec::new()).is_ok());
    }

    #[test]
    fn test_upload_accepts_whitespace_filename() {
        let upload = Upload::new("  ", None, vec![1]).unwrap();
        assert_eq!(upload.filename, "  ");
    }

    #[tokio::test]
    async fn test_whitespace_filename_is_stored() {
        let temp = TempDir::new().unwrap();
        let processor = PassthroughProcessor::new(UploadStore::new(temp.path()), "/uploads");

        let processed = processor
            .process(Upload::new("  ", None, b"x".to_vec()).unwrap())
            .await
            .unwrap();

        assert!(processed.stored_name.ends_with("-__"));
    }

    #[tokio::test]
    async fn test_passthrough_returns_public_url() {
        let temp = TempDir::new().unwrap();
        let processor = PassthroughProcessor::new(UploadStore::new(temp.path()), "/uploads/");

        let upload = Upload::new("sunset beach.png", Some("image/png".into()), b"png".to_vec())
            .unwrap();
        let processed = processor.process(upload).await.unwrap();

        assert!(processed.url.starts_with("/uploads/"));
        assert!(processed.url.ends_with("-sunset_beach.png"));
        assert_eq!(processed.url, format!("/uploads/{}", processed.stored_name));
        assert!(temp.path().join(&processed.stored_name).exists());
    }
}
