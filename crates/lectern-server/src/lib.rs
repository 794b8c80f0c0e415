//! HTTP server for Lectern.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered HTML pages (index, video listing, video detail)
//! - Static files from the configured public directory
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use lectern_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 3001,
//!         videos_path: PathBuf::from("videos.json"),
//!         public_dir: PathBuf::from("public"),
//!         site_title: "Lectern".to_string(),
//!         verbose: false,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (lectern-server)
//!                        │
//!                        ├─► Page routes (Rust handlers)
//!                        │       │
//!                        │       ├─► Catalog (videos.json, read per request)
//!                        │       └─► Content compiler ──► HTML templates
//!                        │
//!                        └─► Static files (public directory)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Catalog file with the video records.
    pub videos_path: PathBuf,
    /// Static files directory.
    pub public_dir: PathBuf,
    /// Site title shown in page headers.
    pub site_title: String,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for ETag invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            videos_path: PathBuf::from("videos.json"),
            public_dir: PathBuf::from("public"),
            site_title: "Lectern".to_string(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        videos_path: config.videos_path.clone(),
        public_dir: config.public_dir.clone(),
        site_title: config.site_title.clone(),
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Lectern config.
///
/// # Arguments
///
/// * `config` - Lectern configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &lectern_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        videos_path: config.site_resolved.videos.clone(),
        public_dir: config.site_resolved.public_dir.clone(),
        site_title: config.site_resolved.title.clone(),
        verbose,
        version,
    }
}
