//! spatial-core - Core library for the spatial image service
//!
//! Provides upload storage, the image processing seam, configuration and
//! the error hierarchy used by the HTTP layer and the CLI.

pub mod config;
pub mod error;
pub mod processor;
pub mod storage;

pub use config::ServiceConfig;
pub use error::CoreError;
pub use processor::{ImageProcessor, PassthroughProcessor, ProcessedImage, Upload};
pub use storage::{sanitize_filename, StoredUpload, UploadStore};
