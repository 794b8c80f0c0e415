//! Video catalog for Lectern.
//!
//! Reads the catalog JSON file (`videos.json`) and exposes the video records
//! it contains. The catalog is read per call rather than held in memory, so
//! edits to the file show up on the next request without a restart.
//!
//! Input-shape validation happens here, at the data-source boundary: the
//! content compiler downstream assumes well-formed [`ContentItem`]s and has
//! no error path of its own.
//!
//! [`ContentItem`]: lectern_content::ContentItem

mod catalog;
mod video;

pub use catalog::{Catalog, CatalogError};
pub use video::Video;
