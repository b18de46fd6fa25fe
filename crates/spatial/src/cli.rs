//! CLI client for the upload service
//!
//! Drives the same flow as the dashboard: send one file, read back the
//! processed image URL.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use reqwest::multipart::{Form, Part};
use spatial_types::{
    error_message, resolve_image_url, ApiErrorBody, CreateImageResponse, Creation,
    CREATE_IMAGE_PATH, UPLOAD_FIELD,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Service rejected the upload: {0}")]
    Rejected(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

// ============================================================================
// Upload
// ============================================================================

/// Send `path` to the service at `api_base`
pub async fn upload_file(api_base: &str, path: &Path) -> Result<CreateImageResponse, CliError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidFileName(path.to_path_buf()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let part = Part::bytes(bytes)
        .file_name(filename)
        .mime_str(mime.as_ref())?;
    let form = Form::new().part(UPLOAD_FIELD, part);

    let url = format!("{}{}", api_base.trim_end_matches('/'), CREATE_IMAGE_PATH);
    tracing::debug!(%url, "Sending upload");

    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.json::<ApiErrorBody>().await.ok();
        return Err(CliError::Rejected(error_message(status.as_u16(), body)));
    }

    Ok(response.json::<CreateImageResponse>().await?)
}

/// Absolute URL of the processed image
pub fn resolved_image_url(api_base: &str, response: &CreateImageResponse) -> String {
    resolve_image_url(api_base, &response.processed_image_url)
}

// ============================================================================
// Output
// ============================================================================

/// Render the gallery as a table
pub fn creations_table(creations: &[Creation], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if no_color {
        table.set_header(vec!["ID", "Name", "Date", "Image"]);
    } else {
        table.set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Image").fg(Color::Cyan),
        ]);
    }

    for creation in creations {
        table.add_row(vec![
            creation.id.to_string(),
            creation.name.clone(),
            creation.date.clone(),
            creation.image_url.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use spatial_core::{PassthroughProcessor, ServiceConfig, UploadStore};
    use spatial_types::sample_creations;
    use spatial_web::{create_router, AppState};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::net::TcpListener;

    /// Start the service on an ephemeral port, returning its base URL
    async fn spawn_service(upload_dir: &Path) -> String {
        let config = ServiceConfig {
            upload_dir: upload_dir.to_path_buf(),
            ..Default::default()
        };
        let processor = Arc::new(PassthroughProcessor::new(
            UploadStore::new(upload_dir),
            config.normalized_prefix(),
        ));
        let router = create_router(AppState::new(processor, config));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_upload_round_trip_against_service() {
        let uploads = TempDir::new().unwrap();
        let api = spawn_service(uploads.path()).await;

        let source = TempDir::new().unwrap();
        let photo = source.path().join("beach day.jpg");
        std::fs::write(&photo, b"jpeg").unwrap();

        let response = upload_file(&api, &photo).await.unwrap();

        assert_eq!(response.original_filename, "beach day.jpg");
        let image_url = resolved_image_url(&api, &response);
        assert!(image_url.starts_with(&format!("{}/uploads/", api)));
        assert!(image_url.ends_with("-beach_day.jpg"));

        let fetched = reqwest::get(&image_url).await.unwrap().bytes().await.unwrap();
        assert_eq!(&fetched[..], b"jpeg");
    }

    #[tokio::test]
    async fn test_missing_file_reports_read_error() {
        let err = upload_file("http://127.0.0.1:9", Path::new("/nonexistent/photo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }

    #[test]
    fn test_creations_table_lists_every_entry() {
        let creations = sample_creations();
        let rendered = creations_table(&creations, true).to_string();

        for creation in &creations {
            assert!(rendered.contains(&creation.name));
        }
        assert!(rendered.contains("Name"));
    }
}
