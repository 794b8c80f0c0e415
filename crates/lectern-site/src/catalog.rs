//! Catalog file loading and slug lookup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::video::Video;

/// The video catalog: the parsed contents of `videos.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    /// All video records, in file order.
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the file does not exist,
    /// [`CatalogError::Io`] for other read failures, and
    /// [`CatalogError::Parse`] if the JSON is malformed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Find a video by its slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.slug == slug)
    }
}

/// Catalog loading error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file not found.
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
