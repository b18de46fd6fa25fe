//! spatial-web - Dashboard frontend and upload service using Leptos + Axum
//!
//! The Leptos app (`csr` feature) is compiled to WASM with Trunk. The Axum
//! router (`ssr` feature, default) receives uploads from it.

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, AppState};

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use crate::router::{create_router, AppState};
    use anyhow::{Context, Result};
    use spatial_core::{PassthroughProcessor, ServiceConfig, UploadStore};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    /// Run the upload service until Ctrl-C
    pub async fn run(config: ServiceConfig) -> Result<()> {
        config.validate()?;

        let store = UploadStore::new(&config.upload_dir);
        store
            .ensure_dir()
            .await
            .context("Failed to prepare upload directory")?;

        let processor = Arc::new(PassthroughProcessor::new(store, config.normalized_prefix()));
        let addr = config.socket_addr()?;
        let router = create_router(AppState::new(processor, config));

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Upload service listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("Shutting down upload service");
    }
}
