//! spatial-types - Shared data types for the spatial image dashboard
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - spatial-core (backend logic)
//! - spatial-web (frontend WASM + Axum router)
//! - spatial (CLI client)

pub mod models;
pub mod page;

// Re-export model types
pub use models::{
    error_message, resolve_image_url, sample_creations, ApiErrorBody, CreateImageResponse,
    Creation, CREATE_IMAGE_PATH, DEFAULT_API_BASE, FALLBACK_IMAGE_URL, UPLOAD_FIELD,
};
pub use page::Page;
