//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use lectern_site::{Catalog, CatalogError};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Catalog file with the video records.
    pub(crate) videos_path: PathBuf,
    /// Static files directory.
    pub(crate) public_dir: PathBuf,
    /// Site title shown in page headers.
    pub(crate) site_title: String,
    /// Enable verbose output (log unknown content block types).
    pub(crate) verbose: bool,
    /// Application version for ETag invalidation.
    pub(crate) version: String,
}

impl AppState {
    /// Load the catalog from disk.
    ///
    /// Read per request so edits to the catalog file show up on the next
    /// request without a restart. The read is synchronous, so it runs on
    /// the blocking pool instead of the async executor.
    pub(crate) async fn catalog(&self) -> Result<Catalog, CatalogError> {
        let path = self.videos_path.clone();
        tokio::task::spawn_blocking(move || Catalog::load(&path))
            .await
            .expect("Catalog load task panicked")
    }
}
