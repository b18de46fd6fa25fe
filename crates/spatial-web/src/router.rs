//! Web router using Axum

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use spatial_core::{CoreError, ImageProcessor, ServiceConfig, Upload};
use spatial_types::{sample_creations, CreateImageResponse, Creation, CREATE_IMAGE_PATH, UPLOAD_FIELD};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppResult;

/// Message returned for every accepted upload
pub const UPLOAD_ACCEPTED: &str = "Image received successfully!";

/// Shared handler state (cheap to clone)
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<dyn ImageProcessor>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(processor: Arc<dyn ImageProcessor>, config: ServiceConfig) -> Self {
        Self {
            processor,
            config: Arc::new(config),
        }
    }
}

/// Create the web router
///
/// The config must have passed [`ServiceConfig::validate`]; a root upload
/// prefix cannot be nested.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/creations", get(creations_handler))
        .route(CREATE_IMAGE_PATH, post(create_spatial_image_handler))
        .nest_service(&state.config.normalized_prefix(), uploads)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index_handler() -> &'static str {
    "Spatial image backend is running!"
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "processor": state.processor.name(),
        "upload_dir": state.config.upload_dir.display().to_string(),
    }))
}

async fn creations_handler() -> Json<Vec<Creation>> {
    Json(sample_creations())
}

/// `POST /api/create-spatial-image` - accept one image in the `file` field
async fn create_spatial_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<CreateImageResponse>> {
    let upload = read_upload(&mut multipart).await?;
    let original_filename = upload.filename.clone();

    info!(
        filename = %original_filename,
        size = upload.bytes.len(),
        processor = state.processor.name(),
        "Received file"
    );

    let processed = state.processor.process(upload).await?;

    Ok(Json(CreateImageResponse {
        message: UPLOAD_ACCEPTED.to_string(),
        original_filename,
        processed_image_url: processed.url,
    }))
}

/// Pull the first `file` field out of the form, skipping anything else
async fn read_upload(multipart: &mut Multipart) -> AppResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(CoreError::EmptyFilename.into());
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Upload::new(filename, content_type, bytes.to_vec())?);
    }

    Err(CoreError::MissingFilePart.into())
}
