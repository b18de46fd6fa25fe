//! Data models shared between the dashboard frontend and the upload service

pub mod api;
pub mod creation;

pub use api::{
    error_message, resolve_image_url, ApiErrorBody, CreateImageResponse, CREATE_IMAGE_PATH,
    DEFAULT_API_BASE, UPLOAD_FIELD,
};
pub use creation::{sample_creations, Creation, FALLBACK_IMAGE_URL};
