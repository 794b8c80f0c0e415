//! Error types for the HTTP server.
//!
//! Errors render as full HTML pages rather than JSON, since every route in
//! this server is server-rendered.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use lectern_site::CatalogError;

use crate::templates;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No video with the given slug in the catalog.
    #[error("Video not found: {0}")]
    VideoNotFound(String),

    /// Catalog file could not be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::VideoNotFound(slug) => {
                tracing::debug!(slug = %slug, "Video not found");
                (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
            }
            Self::Catalog(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(templates::error_page())).into_response()
            }
        }
    }
}
