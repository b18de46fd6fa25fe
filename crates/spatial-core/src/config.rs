//! Service configuration

use crate::error::CoreError;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Default listen port, matching the frontend's API base
pub const DEFAULT_PORT: u16 = 5000;

/// Default request body limit (20 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Configuration for the upload service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory uploads are written to
    pub upload_dir: PathBuf,

    /// URL prefix stored uploads are served under
    pub public_prefix: String,

    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from("uploads"),
            public_prefix: "/uploads".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Resolve the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, CoreError> {
        let ip: IpAddr = self.host.parse().map_err(|_| CoreError::InvalidConfig {
            message: format!("'{}' is not a valid IP address", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Reject configurations the router cannot serve
    pub fn validate(&self) -> Result<(), CoreError> {
        let prefix = self.normalized_prefix();
        if prefix == "/" || prefix == "/api" || prefix.starts_with("/api/") {
            return Err(CoreError::InvalidConfig {
                message: format!("public prefix '{}' collides with service routes", prefix),
            });
        }
        if self.max_upload_bytes == 0 {
            return Err(CoreError::InvalidConfig {
                message: "max upload size must be greater than zero".to_string(),
            });
        }
        self.socket_addr().map(|_| ())
    }

    /// Public prefix normalised to a leading slash and no trailing slash
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.public_prefix.trim_matches('/');
        format!("/{}", trimmed)
    }

    /// Build a config with the body limit given in megabytes
    pub fn with_max_upload_mb(mut self, mb: usize) -> Self {
        self.max_upload_bytes = mb.saturating_mul(1024 * 1024);
        self
    }
}
