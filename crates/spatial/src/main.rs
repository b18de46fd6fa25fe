//! spatial - Spatial image dashboard service and CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spatial_core::ServiceConfig;
use spatial_types::{sample_creations, DEFAULT_API_BASE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used by `serve` when RUST_LOG is unset
const SERVE_LOG_FILTER: &str = "spatial=info,spatial_web=info,spatial_core=info,tower_http=info";

/// Log filter for one-shot client commands
const CLIENT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "spatial",
    version,
    about = "Spatial image dashboard service",
    long_about = "Upload service and command-line client for the Spatial-Image.ai dashboard.\n\
                  \n\
                  Examples:\n\
                    spatial                              # Run the upload service on 127.0.0.1:5000\n\
                    spatial serve --port 8080            # Custom port\n\
                    spatial upload photo.jpg             # Send a photo, print the image URL\n\
                    spatial creations                    # List gallery entries\n\
                  \n\
                  Web Frontend Workflow:\n\
                    spatial serve                        # Terminal 1: upload service\n\
                    trunk serve                          # Terminal 2: dashboard on :3000\n\
                  \n\
                  Environment Variables:\n\
                    SPATIAL_HOST                         # Interface to bind\n\
                    SPATIAL_PORT                         # Port to listen on\n\
                    SPATIAL_UPLOAD_DIR                   # Where uploads are stored\n\
                    SPATIAL_MAX_UPLOAD_MB                # Request body limit\n\
                    SPATIAL_API                          # Service URL for `upload`\n\
                    SPATIAL_NO_COLOR                     # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Service options used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SPATIAL_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the upload service (default)
    Serve(ServeArgs),
    /// Upload an image and print the processed image URL
    Upload {
        /// Image file to send
        file: PathBuf,
        /// Base URL of the upload service
        #[arg(long, env = "SPATIAL_API", default_value = DEFAULT_API_BASE)]
        api: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the creations gallery
    Creations {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "SPATIAL_HOST")]
    host: Option<String>,
    /// Port to listen on
    #[arg(long, env = "SPATIAL_PORT")]
    port: Option<u16>,
    /// Directory uploads are written to
    #[arg(long, env = "SPATIAL_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,
    /// Maximum upload size in megabytes
    #[arg(long, env = "SPATIAL_MAX_UPLOAD_MB")]
    max_upload_mb: Option<usize>,
}

impl ServeArgs {
    /// Overlay command-line values on the defaults
    fn into_config(self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.upload_dir {
            config.upload_dir = dir;
        }
        if let Some(mb) = self.max_upload_mb {
            config = config.with_max_upload_mb(mb);
        }
        config
    }
}

fn init_tracing(default_filter: &str, no_color: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve(cli.serve)) {
        Mode::Serve(args) => {
            init_tracing(SERVE_LOG_FILTER, no_color);
            run_serve(args.into_config()).await?;
        }
        Mode::Upload { file, api, json } => {
            init_tracing(CLIENT_LOG_FILTER, no_color);
            run_upload(file, api, json).await?;
        }
        Mode::Creations { json } => {
            init_tracing(CLIENT_LOG_FILTER, no_color);
            run_creations(json, no_color)?;
        }
    }

    Ok(())
}

async fn run_serve(config: ServiceConfig) -> Result<()> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        upload_dir = %config.upload_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Loaded service configuration"
    );

    spatial_web::run(config).await
}

async fn run_upload(file: PathBuf, api: String, json: bool) -> Result<()> {
    if !json {
        eprint!("Uploading {}... ", file.display());
    }

    let response = cli::upload_file(&api, &file)
        .await
        .with_context(|| format!("Failed to upload {}", file.display()));

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            if !json {
                eprintln!("failed");
            }
            return Err(e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        eprintln!("done");
        println!("{}", response.message);
        println!("Image: {}", cli::resolved_image_url(&api, &response));
    }

    Ok(())
}

fn run_creations(json: bool, no_color: bool) -> Result<()> {
    let creations = sample_creations();

    if json {
        println!("{}", serde_json::to_string_pretty(&creations)?);
    } else {
        println!("{}", cli::creations_table(&creations, no_color));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["spatial"]).unwrap();
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_serve_args_override_defaults() {
        let cli = Cli::try_parse_from([
            "spatial",
            "serve",
            "--port",
            "8080",
            "--upload-dir",
            "/tmp/spatial",
            "--max-upload-mb",
            "2",
        ])
        .unwrap();

        let Some(Mode::Serve(args)) = cli.mode else {
            panic!("expected serve mode");
        };
        let config = args.into_config();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/spatial"));
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_bare_invocation_reads_service_env() {
        std::env::set_var("SPATIAL_PORT", "8080");
        let parsed = Cli::try_parse_from(["spatial"]);
        std::env::remove_var("SPATIAL_PORT");

        let cli = parsed.unwrap();
        assert!(cli.mode.is_none());
        assert_eq!(cli.serve.into_config().port, 8080);
    }

    #[test]
    fn test_bare_invocation_accepts_service_flags() {
        let cli = Cli::try_parse_from(["spatial", "--upload-dir", "/tmp/spatial-bare"]).unwrap();
        assert!(cli.mode.is_none());
        assert_eq!(
            cli.serve.into_config().upload_dir,
            PathBuf::from("/tmp/spatial-bare")
        );
    }

    #[test]
    fn test_upload_requires_file() {
        assert!(Cli::try_parse_from(["spatial", "upload"]).is_err());
    }
}
